/// Simple example of using the moodscan library
///
/// Run with:
/// ```
/// cargo run --example simple
/// ```
use std::collections::HashMap;

use moodscan::api::Screener;
use moodscan::error::ScreenError;
use moodscan::screening::Config;
use moodscan::{Locale, QUESTIONS};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("moodscan Depression Screening - Simple Example\n");

    println!("Training on the configured dataset...");
    let config = Config::load_or_default("config.toml")?;
    let screener = Screener::from_config(&config)?;
    let report = screener.report();
    println!(
        "✓ Trained on {} records, held-out accuracy {:.1}%\n",
        report.train_size,
        report.accuracy * 100.0
    );

    // One answer per question, in form order
    let respondents = vec![
        ("Mostly calm", ["Never", "Rarely", "Never", "Rarely", "Never", "Never", "Rarely",
            "Never", "Never", "Never", "Never", "Rarely", "Never", "Never"]),
        ("Some strain", ["Sometimes", "Rarely", "Sometimes", "Often", "Rarely", "Sometimes",
            "Sometimes", "Never", "Sometimes", "Rarely", "Rarely", "Sometimes", "Often", "Sometimes"]),
        ("Struggling", ["Always", "Often", "Always", "Always", "Often", "Always", "Often",
            "Often", "Always", "Sometimes", "Often", "Always", "Always", "Always"]),
    ];

    println!("{}", "=".repeat(70));

    for (name, choices) in respondents {
        let answers: HashMap<String, String> = QUESTIONS
            .iter()
            .zip(choices)
            .map(|(q, choice)| (q.id.to_string(), choice.to_string()))
            .collect();

        println!("\nRespondent: {}", name);
        println!("{}", screener.assess(&answers)?);
        println!("{}", "-".repeat(70));
    }

    // Same model, Indonesian answers and result text
    let screener = screener.with_locale(Locale::Indonesian);
    let jawaban: HashMap<String, String> = QUESTIONS
        .iter()
        .map(|q| (q.id.to_string(), "Sering".to_string()))
        .collect();
    let hasil = screener.assess(&jawaban)?;
    println!("\nTingkat: {} ({})", hasil.display_name, hasil.level);

    // A form with a gap is sent back rather than guessed at
    let mut partial: HashMap<String, String> = QUESTIONS
        .iter()
        .map(|q| (q.id.to_string(), "Kadang-kadang".to_string()))
        .collect();
    partial.remove("hopelessness");
    match screener.assess(&partial) {
        Err(ScreenError::Incomplete(err)) => {
            println!("\nIncomplete form, please answer: {:?}", err.questions_to_reprompt());
        }
        other => println!("\nUnexpected result: {:?}", other.map(|a| a.level)),
    }

    println!("\n✓ Done!");

    Ok(())
}
