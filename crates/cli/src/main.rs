use api_shared::{CheckDigitsRes, ErrorRes, GenerateRes, ValidateRes};
use clap::{Parser, Subcommand};
use cui_core::{CuiService, RandomDigitCount};
use serde::Serialize;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cui")]
#[command(about = "Generate and validate CUI identifiers")]
struct Cli {
    /// Print results as JSON, in the same shape the REST API returns
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new CUI
    Generate {
        /// 4-digit operator code
        operator: String,
        /// Number of random trailing digits in the local code (1-12)
        #[arg(
            long,
            short = 'r',
            default_value_t = i64::from(RandomDigitCount::default().get()),
            allow_negative_numbers = true
        )]
        random_digits: i64,
    },
    /// Validate a 20-character CUI
    Validate {
        /// CUI to validate
        cui: String,
    },
    /// Compute check digits for an 18-character base (PT + operator + local code)
    CheckDigits {
        /// Base to complete
        base: String,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let service = CuiService::new();

    match cli.command {
        Some(Commands::Generate {
            operator,
            random_digits,
        }) => match service.generate(&operator, random_digits) {
            Ok(generated) => {
                let res = GenerateRes::from(generated);
                if cli.json {
                    print_json(&res)?;
                } else {
                    println!("{}", res.cui);
                    println!(
                        "  prefix: {}, operator: {}, local code: {}, check digits: {}",
                        res.prefix, res.operator, res.local_code, res.check_digits
                    );
                    println!(
                        "  random digits: {} ({})",
                        res.random_digits, res.random_part
                    );
                }
            }
            Err(e) => {
                if cli.json {
                    print_json(&ErrorRes::from(&e))?;
                } else {
                    eprintln!("Error generating CUI: {}", e);
                }
                return Ok(ExitCode::FAILURE);
            }
        },
        Some(Commands::Validate { cui }) => {
            let res = ValidateRes::from(service.validate(&cui));
            if cli.json {
                print_json(&res)?;
            } else {
                println!("{}", res.message);
                if let Some(correct) = &res.correct_digits {
                    println!("  correct check digits: {}", correct);
                }
            }
            if !res.valid {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::CheckDigits { base }) => match service.check_digits(&base) {
            Ok(result) => {
                let res = CheckDigitsRes::from(result);
                if cli.json {
                    print_json(&res)?;
                } else {
                    println!("Check digits: {}", res.check_digits);
                    println!("CUI: {}", res.cui);
                }
            }
            Err(e) => {
                if cli.json {
                    print_json(&ErrorRes::from(&e))?;
                } else {
                    eprintln!("Error computing check digits: {}", e);
                }
                return Ok(ExitCode::FAILURE);
            }
        },
        None => {
            println!("Use 'cui --help' for commands");
        }
    }

    Ok(ExitCode::SUCCESS)
}
