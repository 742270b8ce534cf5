use crate::cli::AnalyzeArgs;
use crate::config::PartialAnalyzeConfig;
use crate::error::Result;
use crate::report;
use protcomp::profile::protein::Protein;
use tracing::{debug, info};

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let partial = match &args.config {
        Some(path) => PartialAnalyzeConfig::from_file(path)?,
        None => PartialAnalyzeConfig::default(),
    };
    let config = partial.merge_with_cli(&args)?;
    debug!("Resolved analyze configuration: {:?}", &config);

    info!("Analyzing header records of {:?}", &args.input);
    let protein = Protein::with_options(&args.input, config.options);

    let rendered = report::render(&protein, &config.sections)?;
    print!("{}", rendered);

    Ok(())
}
