//! # Recalculation Coordinator
//!
//! Turns an input snapshot into a results record, either from scratch or by
//! reusing the unchanged parts of the previous record.
//!
//! Two modes:
//!
//! - **Full recompute** — material, thickness, temperature or unit-system
//!   change, or no prior record exists. Every enabled category and every
//!   secondary estimate is rebuilt.
//! - **Selective recompute** — a change local to one operation category.
//!   The other categories' per-piece tonnage is backed out of the previous
//!   record (dividing by the *previous* batch quantity) and reused; only the
//!   changed category is recomputed. A disabled category contributes zero
//!   regardless of cache.
//!
//! The engine computes in metric internally; imperial snapshots are
//! converted once on entry. All tonnage values in [`Results`] are metric
//! tons — display conversion happens exactly once, at the formatting
//! boundary ([`crate::units::format_quantity`]).
//!
//! Returns `None` when no material is selected or thickness is non-positive:
//! the "not enough input" state, not an error.

use serde::{Deserialize, Serialize};

use crate::calculations::{
    bend_tonnage, draw_tonnage, form_tonnage, hole_tonnage, perimeter_tonnage, reverse_tonnage,
};
use crate::errors::Diagnostics;
use crate::materials::SelectedMaterial;
use crate::operations::{BendItem, DrawItem, FormItem, HoleItem, OperationKind, OperationSet};
use crate::recommendations::{self, ProcessRecommendations};
use crate::springback::{self, SpringbackEstimate};
use crate::surface_finish::{self, FinishConditions, Lubricant, SurfaceFinishReport};
use crate::temperature::{temperature_factor, TemperatureRegime};
use crate::tool_wear::{self, ToolCoating, ToolMaterial, ToolWearReport};
use crate::units::{convert, Unit, UnitSystem};

/// Default parts-per-hour assumption for tool wear scheduling.
const DEFAULT_PRODUCTION_RATE: f64 = 100.0;

// ============================================================================
// Input Snapshot
// ============================================================================

/// Global process parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    /// Sheet thickness in the snapshot's unit system
    pub thickness: f64,
    /// Temperature in the snapshot's unit system
    pub temperature: f64,
    pub batch_quantity: u32,
    pub unit_system: UnitSystem,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            thickness: 1.0,
            temperature: 20.0,
            batch_quantity: 1,
            unit_system: UnitSystem::Metric,
        }
    }
}

/// Immutable input snapshot consumed by the coordinator.
///
/// The hosting layer owns the mutable state; the coordinator only ever reads
/// a snapshot and returns a fresh [`Results`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub material: Option<SelectedMaterial>,
    pub parameters: Parameters,
    pub operations: OperationSet,
}

/// What changed since the last recalculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputChange {
    Material,
    Thickness,
    Temperature,
    UnitSystem,
    BatchQuantity,
    Perimeter,
    Holes,
    Bends,
    Forms,
    Draws,
}

impl InputChange {
    /// Changes that invalidate every cached category.
    pub fn requires_full_recalculation(self) -> bool {
        matches!(
            self,
            InputChange::Material
                | InputChange::Thickness
                | InputChange::Temperature
                | InputChange::UnitSystem
        )
    }
}

// ============================================================================
// Results
// ============================================================================

/// Which categories were enabled when the record was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Dependencies {
    pub perimeter: bool,
    pub holes: bool,
    pub bends: bool,
    pub forms: bool,
    pub draws: bool,
}

impl Dependencies {
    fn of(operations: &OperationSet) -> Self {
        Dependencies {
            perimeter: operations.perimeter.enabled,
            holes: operations.holes.enabled,
            bends: operations.bends.enabled,
            forms: operations.forms.enabled,
            draws: operations.draws.enabled,
        }
    }
}

/// One geometry item with its computed tonnage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTonnage<T> {
    #[serde(flatten)]
    pub item: T,
    /// Metric tons, per-piece
    pub tonnage: f64,
}

/// Per-item breakdown of the last computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OperationResults {
    pub holes: Vec<ItemTonnage<HoleItem>>,
    pub bends: Vec<ItemTonnage<BendItem>>,
    pub forms: Vec<ItemTonnage<FormItem>>,
    pub draws: Vec<ItemTonnage<DrawItem>>,
}

/// Temperature context the tonnage was computed under.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureEffects {
    pub factor: f64,
    pub regime: TemperatureRegime,
    /// Temperature as supplied, in the snapshot's unit system
    pub temperature: f64,
    pub unit_system: UnitSystem,
}

/// Tool wear for the whole job plus each enabled operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolWearSummary {
    pub general: ToolWearReport,
    pub operation_data: Vec<ToolWearReport>,
    pub recommendations: Vec<String>,
}

/// The derived results record. All tonnage values are metric tons; the
/// per-category fields are batch-scaled like the totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Results {
    pub per_piece_total_tonnage: f64,
    pub per_piece_reverse_tonnage: f64,
    /// Batch-scaled forward total
    pub total_tonnage: f64,
    /// Batch-scaled reverse total
    pub reverse_tonnage: f64,

    pub perimeter_tonnage: f64,
    pub holes_tonnage: f64,
    pub bend_tonnage: f64,
    pub form_tonnage: f64,
    pub draw_tonnage: f64,

    pub batch_quantity: u32,
    /// Catalog id of the material the record was computed for
    pub material_id: String,
    pub temperature_effects: TemperatureEffects,
    pub operations: OperationResults,

    pub springback: Option<SpringbackEstimate>,
    pub surface_finish: Option<SurfaceFinishReport>,
    pub recommendations: Vec<ProcessRecommendations>,
    pub tool_wear: Option<ToolWearSummary>,

    pub dependencies: Dependencies,
}

// ============================================================================
// Metric working state
// ============================================================================

/// Snapshot values converted to engine units, plus the regime-adjusted
/// material.
struct MetricInputs {
    material: SelectedMaterial,
    thickness_mm: f64,
    temp_factor: f64,
    regime: TemperatureRegime,
    batch_quantity: u32,
}

fn to_mm(value: f64, system: UnitSystem, diag: &mut Diagnostics) -> f64 {
    match system {
        UnitSystem::Metric => value,
        UnitSystem::Imperial => convert(value, Unit::Inch, Unit::Mm, diag),
    }
}

fn prepare(snapshot: &Snapshot, diag: &mut Diagnostics) -> Option<MetricInputs> {
    let material = snapshot.material.as_ref()?;
    let params = &snapshot.parameters;
    if params.thickness <= 0.0 {
        return None;
    }

    let regime = TemperatureRegime::of_temperature(params.temperature, params.unit_system);
    let material = material.with_regime(regime);

    Some(MetricInputs {
        thickness_mm: to_mm(params.thickness, params.unit_system, diag),
        temp_factor: temperature_factor(
            params.temperature,
            params.unit_system,
            material.temperature_coefficient,
        ),
        regime,
        batch_quantity: params.batch_quantity.max(1),
        material,
    })
}

// Per-category compute helpers. Each returns the per-piece tonnage for the
// whole category along with the per-item breakdown.

fn compute_perimeter(snapshot: &Snapshot, inputs: &MetricInputs, diag: &mut Diagnostics) -> f64 {
    if !snapshot.operations.perimeter.enabled {
        return 0.0;
    }
    let length_mm = to_mm(
        snapshot.operations.perimeter.length,
        snapshot.parameters.unit_system,
        diag,
    );
    perimeter_tonnage(
        length_mm,
        inputs.thickness_mm,
        inputs.material.tensile_strength,
        inputs.temp_factor,
        diag,
    )
}

fn compute_holes(
    snapshot: &Snapshot,
    inputs: &MetricInputs,
    diag: &mut Diagnostics,
) -> (f64, Vec<ItemTonnage<HoleItem>>) {
    if !snapshot.operations.holes.is_active() {
        return (0.0, Vec::new());
    }
    let system = snapshot.parameters.unit_system;
    let mut total = 0.0;
    let mut items = Vec::with_capacity(snapshot.operations.holes.items.len());
    for hole in &snapshot.operations.holes.items {
        let metric = HoleItem {
            diameter: to_mm(hole.diameter, system, diag),
            width: hole.width.map(|w| to_mm(w, system, diag)),
            ..hole.clone()
        };
        let tonnage = hole_tonnage(
            &metric,
            inputs.thickness_mm,
            inputs.material.tensile_strength,
            inputs.temp_factor,
            diag,
        );
        total += tonnage;
        items.push(ItemTonnage { item: hole.clone(), tonnage });
    }
    (total, items)
}

fn compute_bends(
    snapshot: &Snapshot,
    inputs: &MetricInputs,
    diag: &mut Diagnostics,
) -> (f64, Vec<ItemTonnage<BendItem>>) {
    if !snapshot.operations.bends.is_active() {
        return (0.0, Vec::new());
    }
    let system = snapshot.parameters.unit_system;
    let mut total = 0.0;
    let mut items = Vec::with_capacity(snapshot.operations.bends.items.len());
    for bend in &snapshot.operations.bends.items {
        let metric = BendItem {
            length: to_mm(bend.length, system, diag),
            ..bend.clone()
        };
        let tonnage = bend_tonnage(
            &metric,
            inputs.thickness_mm,
            inputs.material.tensile_strength,
            inputs.temp_factor,
            diag,
        );
        total += tonnage;
        items.push(ItemTonnage { item: bend.clone(), tonnage });
    }
    (total, items)
}

fn compute_forms(
    snapshot: &Snapshot,
    inputs: &MetricInputs,
    diag: &mut Diagnostics,
) -> (f64, Vec<ItemTonnage<FormItem>>) {
    if !snapshot.operations.forms.is_active() {
        return (0.0, Vec::new());
    }
    let system = snapshot.parameters.unit_system;
    let n = inputs
        .material
        .active_properties()
        .strain_hardening_exponent;
    let mut total = 0.0;
    let mut items = Vec::with_capacity(snapshot.operations.forms.items.len());
    for form in &snapshot.operations.forms.items {
        let metric = FormItem {
            diameter: to_mm(form.diameter, system, diag),
            depth: to_mm(form.depth, system, diag),
            ..form.clone()
        };
        let tonnage = form_tonnage(
            &metric,
            inputs.thickness_mm,
            inputs.material.tensile_strength,
            inputs.temp_factor,
            n,
            diag,
        );
        total += tonnage;
        items.push(ItemTonnage { item: form.clone(), tonnage });
    }
    (total, items)
}

fn compute_draws(
    snapshot: &Snapshot,
    inputs: &MetricInputs,
    diag: &mut Diagnostics,
) -> (f64, Vec<ItemTonnage<DrawItem>>) {
    if !snapshot.operations.draws.is_active() {
        return (0.0, Vec::new());
    }
    let system = snapshot.parameters.unit_system;
    let props = inputs.material.active_properties();
    let n = props.strain_hardening_exponent;
    let friction = props.friction_coefficient;
    let mut total = 0.0;
    let mut items = Vec::with_capacity(snapshot.operations.draws.items.len());
    for draw in &snapshot.operations.draws.items {
        let metric = DrawItem {
            diameter: to_mm(draw.diameter, system, diag),
            depth: to_mm(draw.depth, system, diag),
            ..draw.clone()
        };
        let tonnage = draw_tonnage(
            &metric,
            inputs.thickness_mm,
            inputs.material.tensile_strength,
            inputs.temp_factor,
            n,
            friction,
            diag,
        );
        total += tonnage;
        items.push(ItemTonnage { item: draw.clone(), tonnage });
    }
    (total, items)
}

// Secondary estimates, rebuilt on every pass.

fn compute_springback(
    snapshot: &Snapshot,
    inputs: &MetricInputs,
) -> Option<SpringbackEstimate> {
    if !snapshot.operations.bends.is_active() {
        return None;
    }
    let first = &snapshot.operations.bends.items[0];
    let bend_radius_mm = first.radius_to_thickness * inputs.thickness_mm;
    Some(springback::estimate(
        first.angle,
        inputs.thickness_mm,
        bend_radius_mm,
        &inputs.material,
    ))
}

fn compute_surface_finish(
    snapshot: &Snapshot,
    inputs: &MetricInputs,
) -> Option<SurfaceFinishReport> {
    if !(snapshot.operations.forms.enabled || snapshot.operations.draws.enabled) {
        return None;
    }
    Some(surface_finish::calculate(
        &inputs.material,
        FinishConditions::default(),
        &Lubricant::none(),
    ))
}

fn enabled_kinds(operations: &OperationSet) -> Vec<OperationKind> {
    let mut kinds = Vec::new();
    if operations.perimeter.enabled {
        kinds.push(OperationKind::Perimeter);
    }
    if operations.holes.enabled {
        kinds.push(OperationKind::Hole);
    }
    if operations.bends.enabled {
        kinds.push(OperationKind::Bend);
    }
    if operations.forms.enabled {
        kinds.push(OperationKind::Form);
    }
    if operations.draws.enabled {
        kinds.push(OperationKind::Draw);
    }
    kinds
}

fn compute_recommendations(
    snapshot: &Snapshot,
    inputs: &MetricInputs,
) -> Vec<ProcessRecommendations> {
    enabled_kinds(&snapshot.operations)
        .into_iter()
        .map(|kind| recommendations::generate(&inputs.material, kind, inputs.thickness_mm))
        .collect()
}

fn compute_tool_wear(snapshot: &Snapshot, inputs: &MetricInputs) -> Option<ToolWearSummary> {
    let kinds = enabled_kinds(&snapshot.operations);
    if kinds.is_empty() {
        return None;
    }

    let wear = |kind| {
        tool_wear::calculate(
            &inputs.material,
            kind,
            ToolMaterial::D2,
            DEFAULT_PRODUCTION_RATE,
            ToolCoating::None,
        )
    };

    Some(ToolWearSummary {
        general: wear(OperationKind::General),
        operation_data: kinds.into_iter().map(wear).collect(),
        recommendations: vec![
            "Regular tool maintenance is recommended to extend tool life".to_string(),
            "Consider using hardened tool steel for abrasive materials".to_string(),
            "Monitor tool wear patterns for early detection of issues".to_string(),
        ],
    })
}

/// Assemble the record from per-piece category tonnages.
fn assemble(
    snapshot: &Snapshot,
    inputs: &MetricInputs,
    per_piece: [f64; 5],
    operations: OperationResults,
) -> Results {
    let [perimeter, holes, bends, forms, draws] = per_piece;
    let per_piece_total = perimeter + holes + bends + forms + draws;
    let per_piece_reverse = reverse_tonnage(per_piece_total, inputs.material.reverse_factor);
    let batch = f64::from(inputs.batch_quantity);

    Results {
        per_piece_total_tonnage: per_piece_total,
        per_piece_reverse_tonnage: per_piece_reverse,
        total_tonnage: per_piece_total * batch,
        reverse_tonnage: per_piece_reverse * batch,
        perimeter_tonnage: perimeter * batch,
        holes_tonnage: holes * batch,
        bend_tonnage: bends * batch,
        form_tonnage: forms * batch,
        draw_tonnage: draws * batch,
        batch_quantity: inputs.batch_quantity,
        material_id: inputs.material.id.clone(),
        temperature_effects: TemperatureEffects {
            factor: inputs.temp_factor,
            regime: inputs.regime,
            temperature: snapshot.parameters.temperature,
            unit_system: snapshot.parameters.unit_system,
        },
        operations,
        springback: compute_springback(snapshot, inputs),
        surface_finish: compute_surface_finish(snapshot, inputs),
        recommendations: compute_recommendations(snapshot, inputs),
        tool_wear: compute_tool_wear(snapshot, inputs),
        dependencies: Dependencies::of(&snapshot.operations),
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Recompute everything from the snapshot.
///
/// `None` when no material is selected or thickness ≤ 0.
pub fn full_recalculation(snapshot: &Snapshot, diag: &mut Diagnostics) -> Option<Results> {
    let inputs = prepare(snapshot, diag)?;

    let perimeter = compute_perimeter(snapshot, &inputs, diag);
    let (holes, hole_items) = compute_holes(snapshot, &inputs, diag);
    let (bends, bend_items) = compute_bends(snapshot, &inputs, diag);
    let (forms, form_items) = compute_forms(snapshot, &inputs, diag);
    let (draws, draw_items) = compute_draws(snapshot, &inputs, diag);

    Some(assemble(
        snapshot,
        &inputs,
        [perimeter, holes, bends, forms, draws],
        OperationResults {
            holes: hole_items,
            bends: bend_items,
            forms: form_items,
            draws: draw_items,
        },
    ))
}

/// Recompute only what `change` invalidates, reusing the rest of
/// `previous`.
///
/// Falls back to a full recomputation when there is no previous record or
/// the change touches material, thickness, temperature or unit system.
pub fn selective_recalculation(
    snapshot: &Snapshot,
    previous: Option<&Results>,
    change: InputChange,
    diag: &mut Diagnostics,
) -> Option<Results> {
    let previous = match previous {
        Some(prev) if !change.requires_full_recalculation() => prev,
        _ => return full_recalculation(snapshot, diag),
    };

    let inputs = prepare(snapshot, diag)?;

    // Cached per-piece values, backed out of the previous batch-scaled
    // figures with the batch quantity they were scaled by.
    let prev_batch = f64::from(previous.batch_quantity.max(1));

    // A category is recomputed when it changed or was disabled at the last
    // computation (its cache is zero, the category may have been re-enabled
    // since). Disabled categories contribute zero regardless of cache.
    let ops = &snapshot.operations;

    let perimeter = if !ops.perimeter.enabled {
        0.0
    } else if change == InputChange::Perimeter || !previous.dependencies.perimeter {
        compute_perimeter(snapshot, &inputs, diag)
    } else {
        previous.perimeter_tonnage / prev_batch
    };

    let (holes, hole_items) = if !ops.holes.enabled {
        (0.0, Vec::new())
    } else if change == InputChange::Holes || !previous.dependencies.holes {
        compute_holes(snapshot, &inputs, diag)
    } else {
        (
            previous.holes_tonnage / prev_batch,
            previous.operations.holes.clone(),
        )
    };

    let (bends, bend_items) = if !ops.bends.enabled {
        (0.0, Vec::new())
    } else if change == InputChange::Bends || !previous.dependencies.bends {
        compute_bends(snapshot, &inputs, diag)
    } else {
        (
            previous.bend_tonnage / prev_batch,
            previous.operations.bends.clone(),
        )
    };

    let (forms, form_items) = if !ops.forms.enabled {
        (0.0, Vec::new())
    } else if change == InputChange::Forms || !previous.dependencies.forms {
        compute_forms(snapshot, &inputs, diag)
    } else {
        (
            previous.form_tonnage / prev_batch,
            previous.operations.forms.clone(),
        )
    };

    let (draws, draw_items) = if !ops.draws.enabled {
        (0.0, Vec::new())
    } else if change == InputChange::Draws || !previous.dependencies.draws {
        compute_draws(snapshot, &inputs, diag)
    } else {
        (
            previous.draw_tonnage / prev_batch,
            previous.operations.draws.clone(),
        )
    };

    Some(assemble(
        snapshot,
        &inputs,
        [perimeter, holes, bends, forms, draws],
        OperationResults {
            holes: hole_items,
            bends: bend_items,
            forms: form_items,
            draws: draw_items,
        },
    ))
}
