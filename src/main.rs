use clap::Parser;
use gpa_calc::config::cli::{self, CliConfig, Command};
use gpa_calc::core::roster;
use gpa_calc::core::scale::GRADE_POINTS;
use gpa_calc::utils::logger;
use gpa_calc::{GradeEngine, Result};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("Calculation failed: {}", e);
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> Result<()> {
    let engine = GradeEngine::new();

    match &config.command {
        Command::Gpa {
            student,
            subjects,
            input,
        } => {
            let entries = match input {
                Some(path) => roster::load_subjects(path)?,
                None => subjects
                    .iter()
                    .map(|raw| cli::parse_subject(raw))
                    .collect::<Result<Vec<_>>>()?,
            };

            let value = engine.gpa(student, None, &entries)?;

            if config.json {
                let payload = serde_json::json!({ "student": student, "gpa": value });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else if student.trim().is_empty() {
                println!("GPA: {value:.2}");
            } else {
                println!("GPA for {}: {value:.2}", student.trim());
            }
        }

        Command::Cgpa { semesters, input } => {
            let entries = match input {
                Some(path) => roster::load_semesters(path)?,
                None => semesters
                    .iter()
                    .map(|raw| cli::parse_semester(raw))
                    .collect::<Result<Vec<_>>>()?,
            };

            let value = engine.cgpa(None, &entries)?;

            if config.json {
                let payload = serde_json::json!({ "cgpa": value });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!("CGPA: {value:.2}");
            }
        }

        Command::Scale => {
            if config.json {
                let payload: Vec<_> = GRADE_POINTS
                    .iter()
                    .map(|(grade, points)| serde_json::json!({ "grade": grade, "points": points }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                for (grade, points) in GRADE_POINTS {
                    println!("{grade:<3} {points:.1}");
                }
            }
        }
    }

    Ok(())
}
