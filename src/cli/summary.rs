use anyhow::Result;
use log::info;

use osmodash::dashboard::DashboardLayout;
use osmodash::stats::BatchSummary;

use super::generate::generate_batch;
use super::report::DashboardReport;
use super::RunSettings;

/// Generate one batch and print the dashboard report
pub fn run(settings: RunSettings) -> Result<()> {
    let (batch, metadata) = generate_batch(&settings);
    info!("Generated {} hours at {}", batch.len(), metadata.generated_at);

    let summary = BatchSummary::from_batch(&batch);
    let layout = DashboardLayout::standard(settings.period);
    let report = DashboardReport::new(&layout, &summary, settings.seed);

    #[cfg(feature = "colorized_output")]
    {
        println!("{}", report.format_colored());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("{}", report);
    }

    Ok(())
}
