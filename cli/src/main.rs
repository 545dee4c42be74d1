mod search;
mod session;

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use listing_scraper::SearchCriteria;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search job listings, rank them against your skills and generate
    /// application material for a selected listing
    Search {
        /// Job title to search for
        #[clap(long)]
        query: String,

        /// Location filter
        #[clap(long, default_value = SearchCriteria::DEFAULT_LOCATION)]
        location: String,

        /// Comma separated list of your skills
        #[clap(long, default_value = "")]
        skills: String,

        /// Short professional summary, used for cover letters
        #[clap(long, default_value = "")]
        bio: String,

        /// Maximum number of listings to fetch
        #[clap(long, default_value_t = SearchCriteria::DEFAULT_MAX_RESULTS)]
        max_results: usize,

        /// Print the ranked listings and exit without an interactive session
        #[clap(long)]
        non_interactive: bool,
    },
}

fn parse_skills(skills: &str) -> Vec<String> {
    skills
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    match args.command {
        Commands::Search {
            query,
            location,
            skills,
            bio,
            max_results,
            non_interactive,
        } => {
            let criteria = SearchCriteria {
                query,
                location,
                skills: parse_skills(&skills),
                max_results,
            };
            search::run(&criteria, &bio, non_interactive).await;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_skills_trims_and_drops_empty_entries() {
        assert_eq!(
            parse_skills("Java, Spring Boot , ,SQL"),
            vec!["Java", "Spring Boot", "SQL"]
        );
        assert!(parse_skills("").is_empty());
    }
}
