use listing_scraper::JobListing;

pub const COVER_LETTER_SYSTEM: &str = r#"You are a professional cover letter writer specializing in tech jobs.
Generate tailored 3-paragraph cover letters with:
1. Introduction showing enthusiasm
2. Middle highlighting relevant skills
3. Closing with call to action

Key requirements:
- Professional but approachable tone
- Under 400 words
- Highlight top 3 relevant skills
- Personalized for the specific company
- No generic templates"#;

pub const ADVISOR_SYSTEM: &str = "You are a helpful career advisor.";

pub fn cover_letter(job: &JobListing, skills: &[String], bio: &str) -> String {
    format!(
        r#"JOB DETAILS:
- Position: {title}
- Company: {company}
- Description: {summary}

CANDIDATE PROFILE:
- Skills: {skills}
- Experience: {bio}

INSTRUCTIONS:
1. Focus on the most relevant 3 skills
2. Structure in 3 paragraphs:
   - Introduction: Express enthusiasm
   - Body: Highlight qualifications
   - Closing: Call to action
3. Keep under 400 words
4. Professional but approachable tone
5. Personalized for the company"#,
        title = job.title,
        company = job.company,
        summary = job.summary,
        skills = skills.join(", "),
        bio = bio,
    )
}

pub fn interview_tips(job_title: &str, company: &str, skills: &[String]) -> String {
    format!(
        r#"Provide interview preparation tips for a {job_title} position at {company}.
Candidate skills: {skills}

Format:
1. Technical preparation (3 bullet points)
2. Behavioral preparation (3 bullet points)
3. Company-specific tips (2 bullet points)

Keep it professional and actionable."#,
        skills = skills.join(", "),
    )
}

pub fn salary_estimate(job_title: &str, location: &str, requirements: &str) -> String {
    format!(
        r#"Provide salary range estimates for a {job_title} position in {location}.
Requirements: {requirements}

Include:
- Entry-level range
- Mid-career range
- Senior-level range
- Factors affecting compensation

Be specific and cite sources if possible."#
    )
}
