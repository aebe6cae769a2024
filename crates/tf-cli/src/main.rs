//! Terafence contact inquiry CLI

use clap::{Args, Parser, Subcommand};
use tf_core::contact::REFERRAL_SOURCES;
use tf_core::{
    BusinessSegment, ContactConfig, ContactForm, ContactSubmissionFlow, FlowError, HelpType,
    HttpContactEndpoint, SubmitOutcome,
};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "tf-contact")]
#[command(about = "Send an information or quote request to Terafence")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and submit an inquiry
    Submit {
        #[command(flatten)]
        inquiry: InquiryArgs,

        /// Contact endpoint URL (defaults to CONTACT_ENDPOINT_URL)
        #[arg(short, long)]
        endpoint: Option<String>,

        /// Validate and print the JSON payload without sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// List accepted values for the select fields
    Options,
}

#[derive(Args, Debug, Default)]
struct InquiryArgs {
    #[arg(long, default_value = "")]
    first_name: String,

    #[arg(long, default_value = "")]
    last_name: String,

    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, default_value = "")]
    phone: String,

    #[arg(long, default_value = "")]
    company: String,

    #[arg(long, default_value = "")]
    job_title: String,

    /// manufacturing, healthcare, finance, technology or other
    #[arg(long, default_value = "")]
    business_segment: String,

    /// product-info, quote, demo, support or other
    #[arg(long, default_value = "")]
    help_type: String,

    /// How you heard about us
    #[arg(long, default_value = "")]
    referral_source: String,

    /// Additional details about your requirements
    #[arg(short, long, default_value = "")]
    details: String,
}

impl From<InquiryArgs> for ContactForm {
    fn from(args: InquiryArgs) -> Self {
        ContactForm {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            phone: args.phone,
            company: args.company,
            job_title: args.job_title,
            business_segment: args.business_segment,
            help_type: args.help_type,
            referral_source: args.referral_source,
            additional_details: args.details,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set subscriber: {}", e);
    }

    let code = match cli.command {
        Commands::Submit { inquiry, endpoint, dry_run } => {
            cmd_submit(inquiry.into(), endpoint, dry_run).await
        }
        Commands::Options => {
            cmd_options();
            0
        }
    };

    std::process::exit(code);
}

async fn cmd_submit(form: ContactForm, endpoint_url: Option<String>, dry_run: bool) -> i32 {
    let mut flow = ContactSubmissionFlow::with_form(form);

    if dry_run {
        return match flow.form().validate() {
            Ok(request) => match request.to_json() {
                Ok(json) => {
                    println!("{}", json);
                    0
                }
                Err(e) => {
                    error!("Failed to encode payload: {}", e);
                    1
                }
            },
            Err(errors) => {
                print_field_errors(&errors.to_string());
                1
            }
        };
    }

    let mut config = ContactConfig::default();
    if let Some(url) = endpoint_url {
        config.endpoint_url = url;
    }

    let endpoint = match HttpContactEndpoint::new(&config) {
        Ok(endpoint) => endpoint,
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };

    info!("Sending inquiry to {}", endpoint.url());

    match flow.submit(&endpoint).await {
        Ok(SubmitOutcome::Submitted) => {
            println!("\nThank You!\n{}", "=".repeat(50));
            println!("Your inquiry has been submitted successfully.");
            println!("Our team will get back to you shortly.");
            0
        }
        Ok(SubmitOutcome::Failed(e)) => {
            error!("Submission failed: {}", e);
            1
        }
        Err(FlowError::Validation(errors)) => {
            print_field_errors(&errors.to_string());
            1
        }
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}

fn print_field_errors(errors: &str) {
    println!("\nPlease correct the following\n{}", "=".repeat(50));
    for line in errors.lines() {
        println!("  - {}", line);
    }
}

fn cmd_options() {
    println!("\nBusiness Segments\n{}", "=".repeat(50));
    for segment in BusinessSegment::ALL {
        println!("  {:<16} {}", segment.value(), segment.label());
    }

    println!("\nHow Can We Help\n{}", "=".repeat(50));
    for help in HelpType::ALL {
        println!("  {:<16} {}", help.value(), help.label());
    }

    println!("\nReferral Sources (any text accepted)\n{}", "=".repeat(50));
    for (value, label) in REFERRAL_SOURCES {
        println!("  {:<16} {}", value, label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tf_core::Field;

    #[test]
    fn test_parses_submit_flags() {
        let cli = Cli::try_parse_from([
            "tf-contact",
            "submit",
            "--first-name", "Jo",
            "--last-name", "Doe",
            "--email", "a@b.com",
            "--phone", "1234567890",
            "--company", "Ac",
            "--job-title", "Eng",
            "--business-segment", "technology",
            "--help-type", "quote",
            "--referral-source", "web",
            "--dry-run",
        ])
        .unwrap();

        match cli.command {
            Commands::Submit { inquiry, endpoint, dry_run } => {
                assert!(dry_run);
                assert!(endpoint.is_none());
                let form: ContactForm = inquiry.into();
                assert!(form.validate().is_ok());
                assert_eq!(form.get(Field::AdditionalDetails), "");
            }
            Commands::Options => panic!("expected submit"),
        }
    }

    #[test]
    fn test_missing_flags_fail_validation_not_parsing() {
        let cli = Cli::try_parse_from(["tf-contact", "submit", "--email", "not-an-email"]).unwrap();
        let Commands::Submit { inquiry, .. } = cli.command else {
            panic!("expected submit");
        };

        let errors = ContactForm::from(inquiry).validate().unwrap_err();
        assert_eq!(errors.get(Field::Email), Some("Invalid email address"));
        assert!(errors.contains(Field::FirstName));
    }

    #[tokio::test]
    async fn test_dry_run_reports_invalid_form() {
        let code = cmd_submit(ContactForm::default(), None, true).await;
        assert_eq!(code, 1);
    }
}
