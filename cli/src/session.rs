use listing_scraper::JobListing;

/// All UI state for one interactive run: the ranked listings of the last
/// search, the selected listing and the last generated artifacts. Replaced
/// wholesale on a new search; the core pipeline never sees any of it.
#[derive(Default)]
pub struct Session {
    pub jobs: Vec<JobListing>,
    selected: Option<usize>,
    pub cover_letter: Option<String>,
    pub interview_tips: Option<String>,
    pub salary_estimate: Option<String>,
}

impl Session {
    pub fn new(jobs: Vec<JobListing>) -> Self {
        Self {
            jobs,
            ..Default::default()
        }
    }

    /// Selects a listing by zero-based index. Changing the selection clears
    /// the artifacts generated for the previous one.
    pub fn select(&mut self, index: usize) -> Option<&JobListing> {
        if index >= self.jobs.len() {
            return None;
        }
        if self.selected != Some(index) {
            self.cover_letter = None;
            self.interview_tips = None;
            self.salary_estimate = None;
        }
        self.selected = Some(index);
        self.jobs.get(index)
    }

    pub fn selected_job(&self) -> Option<&JobListing> {
        self.selected.and_then(|index| self.jobs.get(index))
    }
}
