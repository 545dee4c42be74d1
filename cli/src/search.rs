use std::io::Write;

use ai_advisor::{Advisor, AdvisorConfig};
use listing_scraper::{rank, Fetcher, JobListing, SearchCriteria};

use crate::session::Session;

pub async fn run(criteria: &SearchCriteria, bio: &str, non_interactive: bool) {
    let fetcher = Fetcher::new();
    let listings = fetcher
        .fetch(&criteria.query, &criteria.location, criteria.max_results)
        .await;
    let ranked = rank(listings, &criteria.skills, &criteria.query);
    if ranked.is_empty() {
        println!("No matching jobs found for '{}'.", criteria.query);
        return;
    }
    println!("Found {} matching jobs!", ranked.len());

    let mut session = Session::new(ranked);
    render(&session.jobs);
    if non_interactive {
        return;
    }

    let advisor = match AdvisorConfig::from_env() {
        Ok(config) => Some(Advisor::new(&config)),
        Err(e) => {
            log::warn!("advisor unavailable: {}", e);
            println!("Note: {}. Letter/tips/salary commands are disabled.", e);
            None
        }
    };

    loop {
        print!("\n[select <n> | letter | tips | salary | save | list | quit] > ");
        let _ = std::io::stdout().flush();
        let mut line = String::new();
        if std::io::stdin().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let mut words = line.split_whitespace();
        match words.next() {
            Some("select") => {
                let picked = words
                    .next()
                    .and_then(|n| n.parse::<usize>().ok())
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|index| session.select(index));
                match picked {
                    Some(job) => println!("Selected: {} at {}", job.title, job.company),
                    None => println!("Pick a listing between 1 and {}.", session.jobs.len()),
                }
            }
            Some("letter") => {
                if let (Some(advisor), Some(job)) = (&advisor, session.selected_job().cloned()) {
                    println!("Drafting your cover letter...");
                    let letter = advisor.cover_letter(&job, &criteria.skills, bio).await;
                    println!("\n{}", letter);
                    session.cover_letter = Some(letter);
                } else {
                    print_action_hint(&advisor, &session);
                }
            }
            Some("tips") => {
                if let (Some(advisor), Some(job)) = (&advisor, session.selected_job().cloned()) {
                    println!("Preparing interview strategy...");
                    let tips = advisor
                        .interview_tips(&job.title, &job.company, &criteria.skills)
                        .await;
                    println!("\n{}", tips);
                    session.interview_tips = Some(tips);
                } else {
                    print_action_hint(&advisor, &session);
                }
            }
            Some("salary") => {
                if let (Some(advisor), Some(job)) = (&advisor, session.selected_job().cloned()) {
                    println!("Analyzing market rates...");
                    let estimate = advisor
                        .salary_estimate(&job.title, &criteria.location, &job.summary)
                        .await;
                    println!("\n{}", estimate);
                    session.salary_estimate = Some(estimate);
                } else {
                    print_action_hint(&advisor, &session);
                }
            }
            Some("save") => save_cover_letter(&session),
            Some("list") => render(&session.jobs),
            Some("quit") | Some("q") | Some("exit") => break,
            Some(other) => println!("Unknown command: {}", other),
            None => {}
        }
    }
}

fn print_action_hint(advisor: &Option<Advisor>, session: &Session) {
    if advisor.is_none() {
        println!("Advisor is not configured, set OPENAI_API_KEY first.");
    } else if session.selected_job().is_none() {
        println!("Select a listing first, e.g. 'select 1'.");
    }
}

fn render(jobs: &[JobListing]) {
    for (i, job) in jobs.iter().enumerate() {
        println!(
            "{}. {} at {} (Match: {}/5)",
            i + 1,
            job.title,
            job.company,
            job.match_score.unwrap_or(0)
        );
        println!("   {}", job.summary);
        println!("   {}", job.url);
    }
}

fn save_cover_letter(session: &Session) {
    let (Some(letter), Some(job)) = (&session.cover_letter, session.selected_job()) else {
        println!("Generate a cover letter first with 'letter'.");
        return;
    };
    let filename = format!("cover_letter_{}.txt", job.company.replace(' ', "_"));
    match std::fs::write(&filename, letter) {
        Ok(()) => println!("Saved {}", filename),
        Err(e) => {
            log::error!("failed to write {}: {}", filename, e);
            println!("Could not save {}: {}", filename, e);
        }
    }
}
