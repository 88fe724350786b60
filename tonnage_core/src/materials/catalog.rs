//! Built-in material catalog.
//!
//! A representative set of common sheet-metal alloys with property bundles
//! for all three temperature regimes. The hosting application may supply its
//! own materials; these cover the typical press-shop cases out of the box.
//!
//! Warm/hot strength values follow published elevated-temperature data,
//! rounded to catalog precision.

use once_cell::sync::Lazy;

use crate::errors::{CalcError, CalcResult};
use crate::materials::{
    FormingCharacteristics, Material, MaterialCategory, MaterialProperties, PropertyTable,
};
use crate::temperature::DEFAULT_TEMPERATURE_COEFFICIENT;

static CATALOG: Lazy<Vec<Material>> = Lazy::new(|| {
    vec![
        mild_steel(),
        stainless_304(),
        aluminum_6061(),
        copper_c110(),
        brass_c260(),
        titanium_grade2(),
    ]
});

/// All built-in materials, in catalog order.
pub fn all() -> &'static [Material] {
    &CATALOG
}

/// Look up a material by id.
pub fn find(id: &str) -> CalcResult<&'static Material> {
    CATALOG
        .iter()
        .find(|m| m.id == id)
        .ok_or_else(|| CalcError::material_not_found(id))
}

fn mild_steel() -> Material {
    Material {
        id: "mild-steel".to_string(),
        name: "Mild Steel (CR 1008)".to_string(),
        category: MaterialCategory::Steel,
        temperature_coefficient: DEFAULT_TEMPERATURE_COEFFICIENT,
        properties: PropertyTable {
            room: MaterialProperties {
                tensile_strength: 400.0,
                yield_strength: 300.0,
                shear_strength: 320.0,
                elongation: Some(25.0),
                hardness: Some(120.0),
                modulus: Some(200.0),
                strain_hardening_exponent: Some(0.18),
                anisotropy_ratio: Some(1.2),
                friction_coefficient: Some(0.35),
                surface_roughness: Some(0.8),
                grain_size: Some(6.0),
                reverse_factor: Some(0.7),
                minimum_bend_radius: Some("0.5t".to_string()),
            },
            warm: Some(MaterialProperties {
                tensile_strength: 340.0,
                yield_strength: 250.0,
                shear_strength: 272.0,
                elongation: Some(30.0),
                hardness: Some(100.0),
                modulus: Some(190.0),
                strain_hardening_exponent: Some(0.16),
                anisotropy_ratio: Some(1.2),
                friction_coefficient: Some(0.38),
                surface_roughness: Some(0.9),
                grain_size: Some(6.0),
                reverse_factor: Some(0.7),
                minimum_bend_radius: Some("0.5t".to_string()),
            }),
            hot: Some(MaterialProperties {
                tensile_strength: 220.0,
                yield_strength: 150.0,
                shear_strength: 176.0,
                elongation: Some(42.0),
                hardness: Some(65.0),
                modulus: Some(170.0),
                strain_hardening_exponent: Some(0.12),
                anisotropy_ratio: Some(1.1),
                friction_coefficient: Some(0.42),
                surface_roughness: Some(1.2),
                grain_size: Some(5.0),
                reverse_factor: Some(0.7),
                minimum_bend_radius: Some("0.5t".to_string()),
            }),
        },
        forming_characteristics: FormingCharacteristics {
            recommended_die_clearance: Some("6%".to_string()),
            recommended_punch_speed: Some("150-300mm/s".to_string()),
            blank_holding_force: Some("Medium".to_string()),
            lubricant_type: Some("Light drawing oil".to_string()),
            grain_direction_effect: Some("Moderate".to_string()),
            minimum_bend_radius: Some("0.5t".to_string()),
            max_forming_depth: Some("70% of diameter".to_string()),
            springback: Some("Low".to_string()),
        },
    }
}

fn stainless_304() -> Material {
    Material {
        id: "stainless-304".to_string(),
        name: "Stainless Steel 304".to_string(),
        category: MaterialCategory::StainlessSteel,
        temperature_coefficient: 0.00015,
        properties: PropertyTable {
            room: MaterialProperties {
                tensile_strength: 620.0,
                yield_strength: 290.0,
                shear_strength: 480.0,
                elongation: Some(55.0),
                hardness: Some(170.0),
                modulus: Some(193.0),
                strain_hardening_exponent: Some(0.45),
                anisotropy_ratio: Some(1.0),
                friction_coefficient: Some(0.45),
                surface_roughness: Some(0.5),
                grain_size: Some(7.0),
                reverse_factor: Some(0.75),
                minimum_bend_radius: Some("1.0t".to_string()),
            },
            warm: Some(MaterialProperties {
                tensile_strength: 520.0,
                yield_strength: 240.0,
                shear_strength: 400.0,
                elongation: Some(48.0),
                hardness: Some(150.0),
                modulus: Some(185.0),
                strain_hardening_exponent: Some(0.40),
                anisotropy_ratio: Some(1.0),
                friction_coefficient: Some(0.48),
                surface_roughness: Some(0.6),
                grain_size: Some(7.0),
                reverse_factor: Some(0.75),
                minimum_bend_radius: Some("1.0t".to_string()),
            }),
            hot: Some(MaterialProperties {
                tensile_strength: 380.0,
                yield_strength: 170.0,
                shear_strength: 290.0,
                elongation: Some(40.0),
                hardness: Some(110.0),
                modulus: Some(165.0),
                strain_hardening_exponent: Some(0.30),
                anisotropy_ratio: Some(1.0),
                friction_coefficient: Some(0.52),
                surface_roughness: Some(0.8),
                grain_size: Some(6.0),
                reverse_factor: Some(0.75),
                minimum_bend_radius: Some("1.0t".to_string()),
            }),
        },
        forming_characteristics: FormingCharacteristics {
            recommended_die_clearance: Some("8%".to_string()),
            recommended_punch_speed: Some("100-200mm/s".to_string()),
            blank_holding_force: Some("High".to_string()),
            lubricant_type: Some("Chlorinated oil".to_string()),
            grain_direction_effect: Some("Significant".to_string()),
            minimum_bend_radius: Some("1.0t".to_string()),
            max_forming_depth: Some("60% of diameter".to_string()),
            springback: Some("High".to_string()),
        },
    }
}

fn aluminum_6061() -> Material {
    Material {
        id: "aluminum-6061-t6".to_string(),
        name: "Aluminum 6061-T6".to_string(),
        category: MaterialCategory::Aluminum,
        temperature_coefficient: 0.0005,
        properties: PropertyTable {
            room: MaterialProperties {
                tensile_strength: 310.0,
                yield_strength: 276.0,
                shear_strength: 207.0,
                elongation: Some(12.0),
                hardness: Some(95.0),
                modulus: Some(69.0),
                strain_hardening_exponent: Some(0.08),
                anisotropy_ratio: Some(0.65),
                friction_coefficient: Some(0.45),
                surface_roughness: Some(0.5),
                grain_size: Some(5.0),
                reverse_factor: Some(0.65),
                minimum_bend_radius: Some("1.5t".to_string()),
            },
            warm: Some(MaterialProperties {
                tensile_strength: 250.0,
                yield_strength: 215.0,
                shear_strength: 165.0,
                elongation: Some(16.0),
                hardness: Some(80.0),
                modulus: Some(66.0),
                strain_hardening_exponent: Some(0.10),
                anisotropy_ratio: Some(0.65),
                friction_coefficient: Some(0.48),
                surface_roughness: Some(0.6),
                grain_size: Some(5.0),
                reverse_factor: Some(0.65),
                minimum_bend_radius: Some("1.2t".to_string()),
            }),
            hot: Some(MaterialProperties {
                tensile_strength: 120.0,
                yield_strength: 90.0,
                shear_strength: 80.0,
                elongation: Some(30.0),
                hardness: Some(40.0),
                modulus: Some(59.0),
                strain_hardening_exponent: Some(0.12),
                anisotropy_ratio: Some(0.70),
                friction_coefficient: Some(0.52),
                surface_roughness: Some(0.8),
                grain_size: Some(4.0),
                reverse_factor: Some(0.65),
                minimum_bend_radius: Some("1.0t".to_string()),
            }),
        },
        forming_characteristics: FormingCharacteristics {
            recommended_die_clearance: Some("5%".to_string()),
            recommended_punch_speed: Some("200-400mm/s".to_string()),
            blank_holding_force: Some("Low-Medium".to_string()),
            lubricant_type: Some("Synthetic lubricant".to_string()),
            grain_direction_effect: Some("Significant".to_string()),
            minimum_bend_radius: Some("1.5t".to_string()),
            max_forming_depth: Some("50% of diameter".to_string()),
            springback: Some("Medium".to_string()),
        },
    }
}

fn copper_c110() -> Material {
    Material {
        id: "copper-c110".to_string(),
        name: "Copper C110 (annealed)".to_string(),
        category: MaterialCategory::Copper,
        temperature_coefficient: 0.0004,
        properties: PropertyTable {
            room: MaterialProperties {
                tensile_strength: 220.0,
                yield_strength: 70.0,
                shear_strength: 160.0,
                elongation: Some(45.0),
                hardness: Some(45.0),
                modulus: Some(117.0),
                strain_hardening_exponent: Some(0.35),
                anisotropy_ratio: Some(0.85),
                friction_coefficient: Some(0.40),
                surface_roughness: Some(0.4),
                grain_size: Some(6.0),
                reverse_factor: Some(0.6),
                minimum_bend_radius: Some("0.5t".to_string()),
            },
            warm: Some(MaterialProperties {
                tensile_strength: 180.0,
                yield_strength: 55.0,
                shear_strength: 130.0,
                elongation: Some(50.0),
                hardness: Some(38.0),
                modulus: Some(112.0),
                strain_hardening_exponent: Some(0.32),
                anisotropy_ratio: Some(0.85),
                friction_coefficient: Some(0.42),
                surface_roughness: Some(0.5),
                grain_size: Some(5.0),
                reverse_factor: Some(0.6),
                minimum_bend_radius: Some("0.5t".to_string()),
            }),
            hot: Some(MaterialProperties {
                tensile_strength: 110.0,
                yield_strength: 35.0,
                shear_strength: 80.0,
                elongation: Some(60.0),
                hardness: Some(25.0),
                modulus: Some(100.0),
                strain_hardening_exponent: Some(0.25),
                anisotropy_ratio: Some(0.85),
                friction_coefficient: Some(0.46),
                surface_roughness: Some(0.7),
                grain_size: Some(4.0),
                reverse_factor: Some(0.6),
                minimum_bend_radius: Some("0.5t".to_string()),
            }),
        },
        forming_characteristics: FormingCharacteristics {
            recommended_die_clearance: Some("5%".to_string()),
            recommended_punch_speed: Some("200-350mm/s".to_string()),
            blank_holding_force: Some("Low".to_string()),
            lubricant_type: Some("Light oil".to_string()),
            grain_direction_effect: Some("Minimal".to_string()),
            minimum_bend_radius: Some("0.5t".to_string()),
            max_forming_depth: Some("75% of diameter".to_string()),
            springback: Some("Low".to_string()),
        },
    }
}

fn brass_c260() -> Material {
    Material {
        id: "brass-c260".to_string(),
        name: "Brass C260 (cartridge)".to_string(),
        category: MaterialCategory::Brass,
        temperature_coefficient: 0.0004,
        properties: PropertyTable {
            room: MaterialProperties {
                tensile_strength: 340.0,
                yield_strength: 125.0,
                shear_strength: 235.0,
                elongation: Some(55.0),
                hardness: Some(70.0),
                modulus: Some(110.0),
                strain_hardening_exponent: Some(0.48),
                anisotropy_ratio: Some(0.9),
                friction_coefficient: Some(0.35),
                surface_roughness: Some(0.4),
                grain_size: Some(6.0),
                reverse_factor: Some(0.65),
                minimum_bend_radius: Some("0.5t".to_string()),
            },
            warm: Some(MaterialProperties {
                tensile_strength: 290.0,
                yield_strength: 105.0,
                shear_strength: 200.0,
                elongation: Some(58.0),
                hardness: Some(60.0),
                modulus: Some(105.0),
                strain_hardening_exponent: Some(0.44),
                anisotropy_ratio: Some(0.9),
                friction_coefficient: Some(0.37),
                surface_roughness: Some(0.5),
                grain_size: Some(5.0),
                reverse_factor: Some(0.65),
                minimum_bend_radius: Some("0.5t".to_string()),
            }),
            hot: Some(MaterialProperties {
                tensile_strength: 170.0,
                yield_strength: 60.0,
                shear_strength: 120.0,
                elongation: Some(65.0),
                hardness: Some(35.0),
                modulus: Some(95.0),
                strain_hardening_exponent: Some(0.35),
                anisotropy_ratio: Some(0.9),
                friction_coefficient: Some(0.40),
                surface_roughness: Some(0.7),
                grain_size: Some(4.0),
                reverse_factor: Some(0.65),
                minimum_bend_radius: Some("0.5t".to_string()),
            }),
        },
        forming_characteristics: FormingCharacteristics {
            recommended_die_clearance: Some("5%".to_string()),
            recommended_punch_speed: Some("200-350mm/s".to_string()),
            blank_holding_force: Some("Medium".to_string()),
            lubricant_type: Some("Light oil".to_string()),
            grain_direction_effect: Some("Minimal".to_string()),
            minimum_bend_radius: Some("0.5t".to_string()),
            max_forming_depth: Some("80% of diameter".to_string()),
            springback: Some("Medium".to_string()),
        },
    }
}

fn titanium_grade2() -> Material {
    Material {
        id: "titanium-grade2".to_string(),
        name: "Titanium Grade 2".to_string(),
        category: MaterialCategory::Titanium,
        temperature_coefficient: 0.0003,
        properties: PropertyTable {
            room: MaterialProperties {
                tensile_strength: 485.0,
                yield_strength: 380.0,
                shear_strength: 350.0,
                elongation: Some(22.0),
                hardness: Some(200.0),
                modulus: Some(105.0),
                strain_hardening_exponent: Some(0.12),
                anisotropy_ratio: Some(3.0),
                friction_coefficient: Some(0.50),
                surface_roughness: Some(1.0),
                grain_size: Some(6.0),
                reverse_factor: Some(0.8),
                minimum_bend_radius: Some("2.5t".to_string()),
            },
            warm: Some(MaterialProperties {
                tensile_strength: 400.0,
                yield_strength: 300.0,
                shear_strength: 290.0,
                elongation: Some(28.0),
                hardness: Some(170.0),
                modulus: Some(100.0),
                strain_hardening_exponent: Some(0.13),
                anisotropy_ratio: Some(2.8),
                friction_coefficient: Some(0.53),
                surface_roughness: Some(1.1),
                grain_size: Some(6.0),
                reverse_factor: Some(0.8),
                minimum_bend_radius: Some("2.0t".to_string()),
            }),
            hot: Some(MaterialProperties {
                tensile_strength: 250.0,
                yield_strength: 180.0,
                shear_strength: 180.0,
                elongation: Some(38.0),
                hardness: Some(120.0),
                modulus: Some(90.0),
                strain_hardening_exponent: Some(0.15),
                anisotropy_ratio: Some(2.5),
                friction_coefficient: Some(0.56),
                surface_roughness: Some(1.4),
                grain_size: Some(5.0),
                reverse_factor: Some(0.8),
                minimum_bend_radius: Some("1.5t".to_string()),
            }),
        },
        forming_characteristics: FormingCharacteristics {
            recommended_die_clearance: Some("10%".to_string()),
            recommended_punch_speed: Some("50-150mm/s".to_string()),
            blank_holding_force: Some("Very High".to_string()),
            lubricant_type: Some("Titanium lubricant".to_string()),
            grain_direction_effect: Some("Extremely Critical".to_string()),
            minimum_bend_radius: Some("2.5t".to_string()),
            max_forming_depth: Some("40% of diameter".to_string()),
            springback: Some("High".to_string()),
        },
    }
}
