//! # Operations
//!
//! The operation set and its geometry item types.
//!
//! Five independent categories, each with an `enabled` flag; every category
//! except perimeter carries an ordered list of geometry items. Item defaults
//! are applied at construction time so a freshly added item always calculates
//! to a sensible non-zero tonnage.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hole shape for punching operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HoleShape {
    #[default]
    Circular,
    Square,
    Rectangular,
}

/// Bend tooling style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BendType {
    #[default]
    VBend,
    UBend,
    AirBend,
    Bottoming,
}

/// Form feature type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormType {
    #[default]
    Emboss,
    Dimple,
    Louver,
    Bead,
    Rib,
}

/// Draw shape type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DrawType {
    #[default]
    Round,
    Rectangular,
    Irregular,
    Tapered,
}

/// Operation category discriminant, used by the tool-wear and
/// process-recommendation models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Perimeter,
    Hole,
    Bend,
    Form,
    Draw,
    General,
}

impl OperationKind {
    pub fn display_name(self) -> &'static str {
        match self {
            OperationKind::Perimeter => "Perimeter Cutting",
            OperationKind::Hole => "Hole Punching",
            OperationKind::Bend => "Bending",
            OperationKind::Form => "Form Features",
            OperationKind::Draw => "Drawing",
            OperationKind::General => "General",
        }
    }
}

// ============================================================================
// Geometry Items
// ============================================================================

/// A single hole to punch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleItem {
    pub id: Uuid,
    pub shape: HoleShape,
    /// Principal dimension (diameter or side) in mm
    pub diameter: f64,
    /// Optional width for rectangular holes, mm; 0.8 × diameter when absent
    #[serde(default)]
    pub width: Option<f64>,
    pub quantity: u32,
}

impl HoleItem {
    pub fn new() -> Self {
        HoleItem {
            id: Uuid::new_v4(),
            shape: HoleShape::Circular,
            diameter: 10.0,
            width: None,
            quantity: 1,
        }
    }
}

impl Default for HoleItem {
    fn default() -> Self {
        HoleItem::new()
    }
}

/// A single bend line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BendItem {
    pub id: Uuid,
    pub bend_type: BendType,
    /// Bend length in mm
    pub length: f64,
    /// Bend angle in degrees, 0 < angle ≤ 180
    pub angle: f64,
    /// Bend radius as a multiple of thickness, ≥ 0.5
    pub radius_to_thickness: f64,
}

impl BendItem {
    pub fn new() -> Self {
        BendItem {
            id: Uuid::new_v4(),
            bend_type: BendType::VBend,
            length: 100.0,
            angle: 90.0,
            radius_to_thickness: 1.0,
        }
    }
}

impl Default for BendItem {
    fn default() -> Self {
        BendItem::new()
    }
}

/// A single form feature (emboss, dimple, louver, bead, rib).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormItem {
    pub id: Uuid,
    pub form_type: FormType,
    /// Feature diameter in mm
    pub diameter: f64,
    /// Feature depth in mm
    pub depth: f64,
    pub quantity: u32,
}

impl FormItem {
    pub fn new() -> Self {
        FormItem {
            id: Uuid::new_v4(),
            form_type: FormType::Emboss,
            diameter: 20.0,
            depth: 2.0,
            quantity: 1,
        }
    }
}

impl Default for FormItem {
    fn default() -> Self {
        FormItem::new()
    }
}

/// A single drawn feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawItem {
    pub id: Uuid,
    pub draw_type: DrawType,
    /// Draw diameter in mm
    pub diameter: f64,
    /// Draw depth in mm
    pub depth: f64,
    pub quantity: u32,
}

impl DrawItem {
    pub fn new() -> Self {
        DrawItem {
            id: Uuid::new_v4(),
            draw_type: DrawType::Round,
            diameter: 50.0,
            depth: 20.0,
            quantity: 1,
        }
    }
}

impl Default for DrawItem {
    fn default() -> Self {
        DrawItem::new()
    }
}

// ============================================================================
// Operation Set
// ============================================================================

/// Perimeter cutting: a single scalar length, mm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PerimeterOp {
    pub enabled: bool,
    pub length: f64,
}

/// One enabled/items pair for a list-based category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ItemSection<T> {
    pub enabled: bool,
    pub items: Vec<T>,
}

impl<T> ItemSection<T> {
    pub fn is_active(&self) -> bool {
        self.enabled && !self.items.is_empty()
    }
}

/// The full operation set: five orthogonal categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OperationSet {
    pub perimeter: PerimeterOp,
    pub holes: ItemSection<HoleItem>,
    pub bends: ItemSection<BendItem>,
    pub forms: ItemSection<FormItem>,
    pub draws: ItemSection<DrawItem>,
}

impl OperationSet {
    /// True if at least one category is enabled.
    pub fn any_enabled(&self) -> bool {
        self.perimeter.enabled
            || self.holes.enabled
            || self.bends.enabled
            || self.forms.enabled
            || self.draws.enabled
    }
}
