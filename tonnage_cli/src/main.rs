//! # Tonnage Calculator CLI
//!
//! Terminal front-end for the tonnage calculation engine. Prompts for a
//! material and a small job description, runs a full recalculation and
//! prints the tonnage breakdown with the secondary estimates.

use std::io::{self, BufRead, Write};

use tonnage_core::coordinator::{full_recalculation, Parameters, Snapshot};
use tonnage_core::errors::Diagnostics;
use tonnage_core::materials::catalog;
use tonnage_core::operations::{BendItem, HoleItem};
use tonnage_core::temperature::{scale_properties, temperature_factor, TemperatureRegime};
use tonnage_core::units::{format_quantity, Quantity, UnitSystem};
use tonnage_core::validation::{
    clamp_bend_angle, clamp_hole_diameter, clamp_perimeter_length, clamp_quantity,
    clamp_radius_to_thickness, clamp_temperature, clamp_thickness,
};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_string(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn main() {
    println!("Tonnage Calculator - Sheet-Metal Press Force Estimator");
    println!("======================================================");
    println!();
    println!("Available materials:");
    for material in catalog::all() {
        println!(
            "  {:<22} {:<16} {}",
            material.id,
            material.category.display_name(),
            material.name
        );
    }
    println!();

    let material_id = prompt_string("Material id [mild-steel]: ", "mild-steel");
    let material = match catalog::find(&material_id) {
        Ok(material) => material,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    };

    let system = UnitSystem::Metric;
    let mut input_diag = Diagnostics::new();

    let thickness = clamp_thickness(
        prompt_f64("Sheet thickness (mm) [2.0]: ", 2.0),
        system,
        &mut input_diag,
    );
    let temperature = clamp_temperature(
        prompt_f64("Working temperature (°C) [20.0]: ", 20.0),
        system,
        &mut input_diag,
    );
    let perimeter = prompt_f64("Perimeter cut length (mm, 0 = none) [500.0]: ", 500.0);
    let perimeter = if perimeter > 0.0 {
        clamp_perimeter_length(perimeter, system, &mut input_diag)
    } else {
        0.0
    };
    let hole_diameter = prompt_f64("Hole diameter (mm, 0 = none) [20.0]: ", 20.0);
    let hole_diameter = if hole_diameter > 0.0 {
        clamp_hole_diameter(hole_diameter, system, &mut input_diag)
    } else {
        0.0
    };
    let hole_count = prompt_f64("Hole count [3]: ", 3.0).max(0.0) as u32;
    let bend_length = prompt_f64("Bend length (mm, 0 = none) [100.0]: ", 100.0);
    let bend_angle = clamp_bend_angle(prompt_f64("Bend angle (°) [90.0]: ", 90.0), &mut input_diag);
    let bend_ratio = clamp_radius_to_thickness(
        prompt_f64("Bend radius / thickness [1.0]: ", 1.0),
        &mut input_diag,
    );
    let batch = clamp_quantity(prompt_f64("Batch quantity [1]: ", 1.0) as u32, &mut input_diag);

    if !input_diag.is_empty() {
        println!();
        println!("Adjusted inputs:");
        for warning in input_diag.warnings() {
            println!("  {} ({})", warning.message, warning.context);
        }
    }

    let regime = TemperatureRegime::of_temperature(temperature, system);
    let mut snapshot = Snapshot {
        material: Some(material.select(regime)),
        parameters: Parameters {
            thickness,
            temperature,
            batch_quantity: batch,
            unit_system: UnitSystem::Metric,
        },
        operations: Default::default(),
    };

    if perimeter > 0.0 {
        snapshot.operations.perimeter.enabled = true;
        snapshot.operations.perimeter.length = perimeter;
    }
    if hole_diameter > 0.0 && hole_count > 0 {
        snapshot.operations.holes.enabled = true;
        snapshot.operations.holes.items.push(HoleItem {
            diameter: hole_diameter,
            quantity: hole_count,
            ..HoleItem::new()
        });
    }
    if bend_length > 0.0 {
        snapshot.operations.bends.enabled = true;
        snapshot.operations.bends.items.push(BendItem {
            length: bend_length,
            angle: bend_angle,
            radius_to_thickness: bend_ratio,
            ..BendItem::new()
        });
    }

    if !snapshot.operations.any_enabled() {
        println!();
        println!("No operations entered; totals will be zero.");
    }

    let factor = temperature_factor(temperature, system, material.temperature_coefficient);
    let adjusted = scale_properties(material.properties.for_regime(regime), factor);

    println!();
    println!("Calculating {} at {:.1} mm, {:.0} °C...", material.name, thickness, temperature);
    println!(
        "Working strengths: tensile {:.0} MPa, yield {:.0} MPa ({})",
        adjusted.tensile_strength, adjusted.yield_strength, regime
    );
    println!();

    let mut diag = Diagnostics::new();
    match full_recalculation(&snapshot, &mut diag) {
        Some(results) => {
            let tons = |value| format_quantity(value, Quantity::Tonnage, UnitSystem::Metric);

            println!("═══════════════════════════════════════");
            println!("  TONNAGE RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Breakdown (batch of {}):", results.batch_quantity);
            println!("  Perimeter: {}", tons(results.perimeter_tonnage));
            println!("  Holes:     {}", tons(results.holes_tonnage));
            println!("  Bends:     {}", tons(results.bend_tonnage));
            println!("  Forms:     {}", tons(results.form_tonnage));
            println!("  Draws:     {}", tons(results.draw_tonnage));
            println!();
            println!("Totals:");
            println!("  Per piece: {}", tons(results.per_piece_total_tonnage));
            println!("  Forward:   {}", tons(results.total_tonnage));
            println!("  Reverse:   {}", tons(results.reverse_tonnage));
            println!();
            println!(
                "Temperature: {:?} regime, strength factor {:.3}",
                results.temperature_effects.regime, results.temperature_effects.factor
            );

            if let Some(springback) = &results.springback {
                println!();
                println!("Springback ({} severity):", springback.suggestions.severity);
                println!("  Relaxation:   {:.2}°", springback.angle);
                println!("  Bend target:  {:.2}°", springback.compensation_angle);
            }

            if let Some(wear) = &results.tool_wear {
                println!();
                println!("Tool wear (D2, uncoated):");
                for report in &wear.operation_data {
                    println!(
                        "  {:<18} {} hits to resharpening",
                        report.operation.display_name(),
                        report.maintenance_intervals.resharpening
                    );
                }
            }

            if !diag.is_empty() {
                println!();
                println!("Warnings:");
                for warning in diag.warnings() {
                    println!("  [{:?}] {} ({})", warning.code, warning.message, warning.context);
                }
            }

            println!();
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&results) {
                println!("{}", json);
            }
        }
        None => {
            eprintln!("Not enough input: select a material and a positive thickness.");
            std::process::exit(1);
        }
    }
}
