//! Command handlers for the intake flow.
//!
//! Each handler builds an [`IntakeSession`] from configuration, drives it the
//! way the web form would, and prints the resulting state.

use std::path::Path;

use sipub_client::{IntakeSession, SubmissionReport};
use sipub_core::{parse_coordinates, AppConfig, FormField, FormState, StatusBanner};

/// Print the coordinate pair parsed from `text`. Malformed components print
/// as `NaN`.
pub(crate) fn run_coords(text: &str) {
    let pair = parse_coordinates(text);
    println!("latitude:  {}", pair.latitude);
    println!("longitude: {}", pair.longitude);
    if !pair.is_valid() {
        println!("(not a valid location)");
    }
}

/// Click the map at `(lat, lng)` and print what the enrichment produced.
///
/// # Errors
///
/// Returns an error if the clients cannot be built or the lookup fails.
pub(crate) async fn run_geocode(config: &AppConfig, lat: f64, lng: f64) -> anyhow::Result<()> {
    let mut session = IntakeSession::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build clients: {e}"))?;

    let result = session.click_map(lat, lng).await;
    if let Some(label) = session.enricher().selected().coordinates_label() {
        println!("coordinates: {label}");
    }
    result?;

    println!("address: {}", session.enricher().selected().display_address);
    if let Some(marker) = session.enricher().marker() {
        println!("marker:  {}", marker.label);
    }
    print_fields(
        session.form(),
        &[
            FormField::Street,
            FormField::Neighborhood,
            FormField::City,
            FormField::State,
            FormField::Country,
        ],
    );
    Ok(())
}

/// Load a form snapshot, optionally click and push a location, then submit.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded, the clients cannot be
/// built, the form fails validation, or any resource fails to be created.
pub(crate) async fn run_submit(
    config: &AppConfig,
    form_path: &Path,
    click: Option<(f64, f64)>,
    push: bool,
) -> anyhow::Result<()> {
    let snapshot = FormState::load_snapshot(form_path)?;
    let mut session = IntakeSession::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build clients: {e}"))?;
    *session.form_mut() = snapshot;

    if let Some((lat, lng)) = click {
        // A failed lookup keeps the snapshot's address; the banner has it.
        if let Err(err) = session.click_map(lat, lng).await {
            tracing::warn!(error = %err, "continuing without map enrichment");
        }
        if push {
            session.push_to_form()?;
        }
    }

    let outcome = session.submit().await;
    print_banner(session.banner());
    let report = outcome?;
    print_report(&report);

    let failed = report.failures().len();
    if failed > 0 {
        anyhow::bail!("{failed} of 3 resources failed to submit");
    }
    Ok(())
}

fn print_fields(form: &FormState, fields: &[FormField]) {
    for field in fields {
        println!("{:<14}{}", field.element_id(), form.get(*field));
    }
}

fn print_report(report: &SubmissionReport) {
    println!("{:<10}{:<9}DETAIL", "RESOURCE", "RESULT");
    for (resource, outcome) in report.outcomes() {
        match outcome {
            Ok(created) => println!(
                "{:<10}{:<9}HTTP {} id={}",
                resource.to_string(),
                "ok",
                created.status,
                created.id.as_deref().unwrap_or("-")
            ),
            Err(failure) => println!(
                "{:<10}{:<9}{}",
                resource.to_string(),
                "failed",
                failure.detail
            ),
        }
    }
}

fn print_banner(banner: &StatusBanner) {
    if let Some(current) = banner.current() {
        println!("{current}");
    }
}
