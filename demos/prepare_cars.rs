use mpg_prep::loader::{load_records_from_path, load_records_from_str};
use mpg_prep::points::points_to_json;
use mpg_prep::{PrepConfig, prepare_with_config};
use std::env;

const BUILTIN: &str = r#"[
    {"Name": "chevrolet chevelle malibu", "Horsepower": 130, "Miles_per_Gallon": 18},
    {"Name": "buick skylark 320", "Horsepower": 165, "Miles_per_Gallon": 15},
    {"Name": "ford pinto", "Horsepower": null, "Miles_per_Gallon": 25},
    {"Name": "datsun pl510", "Horsepower": 88, "Miles_per_Gallon": 27},
    {"Name": "toyota corona mark ii", "Horsepower": 95, "Miles_per_Gallon": 24}
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Usage: prepare_cars [records.json] [config.json]
    let mut args = env::args().skip(1);
    let raw = match args.next() {
        Some(path) => load_records_from_path(path)?,
        None => load_records_from_str(BUILTIN)?,
    };
    let config = match args.next() {
        Some(path) => PrepConfig::from_path(path)?,
        None => PrepConfig::default(),
    };

    println!("=== Preparing {} vs {} ===\n", config.feature_field, config.label_field);

    let prepared = match prepare_with_config(&raw, &config) {
        Ok(prepared) => prepared,
        Err(e) => {
            eprintln!("Cannot train on this data: {e}");
            std::process::exit(1);
        }
    };

    println!("Records: {} of {} usable", prepared.len(), raw.len());
    println!(
        "Feature bounds: [{}, {}]",
        prepared.feature_bounds.min, prepared.feature_bounds.max
    );
    println!(
        "Label bounds:   [{}, {}]",
        prepared.label_bounds.min, prepared.label_bounds.max
    );
    println!("Inputs shape: {:?}", prepared.inputs().shape());
    println!("Labels shape: {:?}", prepared.targets().shape());

    println!("\nNormalized rows:");
    for (i, (x, y)) in prepared
        .features()
        .iter()
        .zip(prepared.labels().iter())
        .enumerate()
    {
        println!("Sample {}: x={:.4}, y={:.4}", i + 1, x, y);
    }

    if let Some(fraction) = config.validation_split {
        let (train, validation) = prepared.train_validation_split(fraction)?;
        println!("\nTrain/validation: {}/{}", train.len(), validation.len());
    }

    println!("\nScatter points:");
    println!("{}", points_to_json(&prepared.to_points())?);

    Ok(())
}
