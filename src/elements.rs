//! Static periodic-table reference data and the derived atom info panel.
//!
//! The table only annotates a built atom; nothing here affects geometry.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::electrons::shell_occupancy;

/// Above this atomic number every nucleus is reported as radioactive.
pub const RADIOACTIVE_THRESHOLD: u32 = 83;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Solid,
    Liquid,
    Gas,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Solid => "Solid",
            Phase::Liquid => "Liquid",
            Phase::Gas => "Gas",
        })
    }
}

/// Periodic-table block used for colouring cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Nonmetal,
    NobleGas,
    AlkaliMetal,
    AlkalineEarthMetal,
    Metalloid,
    Halogen,
    TransitionMetal,
    PostTransitionMetal,
    Lanthanide,
    Actinide,
}

#[derive(Debug, Serialize)]
pub struct ElementRecord {
    pub name: &'static str,
    pub symbol: &'static str,
    /// Neutron count of the most common isotope; used when picking from the table.
    pub typical_neutrons: u32,
    /// Neutron counts of the stable isotopes. Empty when none exist.
    pub stable_neutrons: &'static [u32],
    pub phase: Phase,
    /// Phase is extrapolated, not measured.
    pub phase_predicted: bool,
    pub usage: &'static str,
    pub category: Category,
    pub configuration: &'static str,
}

impl ElementRecord {
    pub fn phase_label(&self) -> String {
        if self.phase_predicted {
            format!("{} (predicted)", self.phase)
        } else {
            self.phase.to_string()
        }
    }
}

#[allow(clippy::too_many_arguments)]
const fn element(
    name: &'static str,
    symbol: &'static str,
    typical_neutrons: u32,
    stable_neutrons: &'static [u32],
    phase: Phase,
    phase_predicted: bool,
    usage: &'static str,
    category: Category,
    configuration: &'static str,
) -> ElementRecord {
    ElementRecord {
        name,
        symbol,
        typical_neutrons,
        stable_neutrons,
        phase,
        phase_predicted,
        usage,
        category,
        configuration,
    }
}

/// Index `z - 1` holds element `z`.
pub static ELEMENTS: [ElementRecord; 118] = [
    element("Hydrogen", "H", 0, &[0, 1], Phase::Gas, false, "Fuel of the stars.", Category::Nonmetal, "1s¹"),
    element("Helium", "He", 2, &[1, 2], Phase::Gas, false, "Filling balloons.", Category::NobleGas, "1s²"),
    element("Lithium", "Li", 4, &[3, 4], Phase::Solid, false, "Rechargeable batteries.", Category::AlkaliMetal, "[He] 2s¹"),
    element("Beryllium", "Be", 5, &[5], Phase::Solid, false, "Telescope components.", Category::AlkalineEarthMetal, "[He] 2s²"),
    element("Boron", "B", 6, &[5, 6], Phase::Solid, false, "Heat-resistant glass.", Category::Metalloid, "[He] 2s² 2p¹"),
    element("Carbon", "C", 6, &[6, 7], Phase::Solid, false, "Basis of life.", Category::Nonmetal, "[He] 2s² 2p²"),
    element("Nitrogen", "N", 7, &[7, 8], Phase::Gas, false, "Fertilizer, atmosphere.", Category::Nonmetal, "[He] 2s² 2p³"),
    element("Oxygen", "O", 8, &[8, 9, 10], Phase::Gas, false, "Respiration.", Category::Nonmetal, "[He] 2s² 2p⁴"),
    element("Fluorine", "F", 10, &[10], Phase::Gas, false, "Toothpaste.", Category::Halogen, "[He] 2s² 2p⁵"),
    element("Neon", "Ne", 10, &[10, 11, 12], Phase::Gas, false, "Advertising signs.", Category::NobleGas, "[He] 2s² 2p⁶"),
    element("Sodium", "Na", 12, &[12], Phase::Solid, false, "Table salt.", Category::AlkaliMetal, "[Ne] 3s¹"),
    element("Magnesium", "Mg", 12, &[12, 13, 14], Phase::Solid, false, "Fireworks.", Category::AlkalineEarthMetal, "[Ne] 3s²"),
    element("Aluminium", "Al", 14, &[14], Phase::Solid, false, "Drink cans.", Category::PostTransitionMetal, "[Ne] 3s² 3p¹"),
    element("Silicon", "Si", 14, &[14, 15, 16], Phase::Solid, false, "Computer chips.", Category::Metalloid, "[Ne] 3s² 3p²"),
    element("Phosphorus", "P", 16, &[16], Phase::Solid, false, "Match heads.", Category::Nonmetal, "[Ne] 3s² 3p³"),
    element("Sulfur", "S", 16, &[16, 17, 18, 20], Phase::Solid, false, "Sulfuric acid.", Category::Nonmetal, "[Ne] 3s² 3p⁴"),
    element("Chlorine", "Cl", 18, &[18, 20], Phase::Gas, false, "Water disinfectant.", Category::Halogen, "[Ne] 3s² 3p⁵"),
    element("Argon", "Ar", 22, &[18, 20, 22], Phase::Gas, false, "Light bulb filler.", Category::NobleGas, "[Ne] 3s² 3p⁶"),
    element("Potassium", "K", 20, &[20, 22], Phase::Solid, false, "Nerve function.", Category::AlkaliMetal, "[Ar] 4s¹"),
    element("Calcium", "Ca", 20, &[20, 22, 24, 26, 28], Phase::Solid, false, "Bones and teeth.", Category::AlkalineEarthMetal, "[Ar] 4s²"),
    element("Scandium", "Sc", 24, &[24], Phase::Solid, false, "Light alloys.", Category::TransitionMetal, "[Ar] 3d¹ 4s²"),
    element("Titanium", "Ti", 26, &[24, 25, 26, 27, 28], Phase::Solid, false, "Medical implants, aircraft.", Category::TransitionMetal, "[Ar] 3d² 4s²"),
    element("Vanadium", "V", 28, &[28], Phase::Solid, false, "Stainless steel.", Category::TransitionMetal, "[Ar] 3d³ 4s²"),
    element("Chromium", "Cr", 28, &[26, 28, 29, 30], Phase::Solid, false, "Metal plating.", Category::TransitionMetal, "[Ar] 3d⁵ 4s¹"),
    element("Manganese", "Mn", 30, &[30], Phase::Solid, false, "Steel production.", Category::TransitionMetal, "[Ar] 3d⁵ 4s²"),
    element("Iron", "Fe", 30, &[28, 30, 31, 32], Phase::Solid, false, "Primary building material.", Category::TransitionMetal, "[Ar] 3d⁶ 4s²"),
    element("Cobalt", "Co", 32, &[32], Phase::Solid, false, "Magnets, batteries.", Category::TransitionMetal, "[Ar] 3d⁷ 4s²"),
    element("Nickel", "Ni", 31, &[30, 32, 33, 34, 36], Phase::Solid, false, "Coins, batteries.", Category::TransitionMetal, "[Ar] 3d⁸ 4s²"),
    element("Copper", "Cu", 35, &[34, 36], Phase::Solid, false, "Electrical wiring.", Category::TransitionMetal, "[Ar] 3d¹⁰ 4s¹"),
    element("Zinc", "Zn", 35, &[34, 36, 37, 38, 40], Phase::Solid, false, "Anti-rust coating.", Category::TransitionMetal, "[Ar] 3d¹⁰ 4s²"),
    element("Gallium", "Ga", 39, &[38, 40], Phase::Solid, false, "Semiconductors, LEDs.", Category::PostTransitionMetal, "[Ar] 3d¹⁰ 4s² 4p¹"),
    element("Germanium", "Ge", 41, &[40, 42, 43, 44], Phase::Solid, false, "Optical fibre.", Category::Metalloid, "[Ar] 3d¹⁰ 4s² 4p²"),
    element("Arsenic", "As", 42, &[42], Phase::Solid, false, "Poison, semiconductors.", Category::Metalloid, "[Ar] 3d¹⁰ 4s² 4p³"),
    element("Selenium", "Se", 45, &[42, 44, 45, 46, 48], Phase::Solid, false, "Photocells, shampoo.", Category::Nonmetal, "[Ar] 3d¹⁰ 4s² 4p⁴"),
    element("Bromine", "Br", 45, &[44, 46], Phase::Liquid, false, "Flame retardants.", Category::Halogen, "[Ar] 3d¹⁰ 4s² 4p⁵"),
    element("Krypton", "Kr", 48, &[42, 44, 46, 47, 48, 50], Phase::Gas, false, "Photographic flash lamps.", Category::NobleGas, "[Ar] 3d¹⁰ 4s² 4p⁶"),
    element("Rubidium", "Rb", 48, &[48], Phase::Solid, false, "Atomic clocks.", Category::AlkaliMetal, "[Kr] 5s¹"),
    element("Strontium", "Sr", 50, &[46, 48, 49, 50], Phase::Solid, false, "Red fireworks.", Category::AlkalineEarthMetal, "[Kr] 5s²"),
    element("Yttrium", "Y", 50, &[50], Phase::Solid, false, "Tube TV screens (formerly).", Category::TransitionMetal, "[Kr] 4d¹ 5s²"),
    element("Zirconium", "Zr", 51, &[50, 51, 52, 54, 56], Phase::Solid, false, "Nuclear reactors.", Category::TransitionMetal, "[Kr] 4d² 5s²"),
    element("Niobium", "Nb", 52, &[52], Phase::Solid, false, "Superconductors.", Category::TransitionMetal, "[Kr] 4d⁴ 5s¹"),
    element("Molybdenum", "Mo", 54, &[50, 52, 53, 54, 55, 56, 58], Phase::Solid, false, "Steel alloys.", Category::TransitionMetal, "[Kr] 4d⁵ 5s¹"),
    element("Technetium", "Tc", 55, &[], Phase::Solid, false, "Medical diagnostics.", Category::TransitionMetal, "[Kr] 4d⁵ 5s²"),
    element("Ruthenium", "Ru", 58, &[52, 54, 55, 56, 57, 58, 60], Phase::Solid, false, "Electrical contacts.", Category::TransitionMetal, "[Kr] 4d⁷ 5s¹"),
    element("Rhodium", "Rh", 58, &[58], Phase::Solid, false, "Catalytic converters.", Category::TransitionMetal, "[Kr] 4d⁸ 5s¹"),
    element("Palladium", "Pd", 60, &[58, 60, 62, 63, 64, 66], Phase::Solid, false, "Catalytic converters.", Category::TransitionMetal, "[Kr] 4d¹⁰"),
    element("Silver", "Ag", 61, &[60, 62], Phase::Solid, false, "Jewellery, conductors.", Category::TransitionMetal, "[Kr] 4d¹⁰ 5s¹"),
    element("Cadmium", "Cd", 66, &[60, 62, 64, 65, 66, 68], Phase::Solid, false, "Ni-Cd batteries.", Category::TransitionMetal, "[Kr] 4d¹⁰ 5s²"),
    element("Indium", "In", 66, &[64, 66], Phase::Solid, false, "Touch screens (ITO).", Category::PostTransitionMetal, "[Kr] 4d¹⁰ 5s² 5p¹"),
    element("Tin", "Sn", 70, &[62, 64, 65, 66, 67, 68, 69, 70, 72, 74], Phase::Solid, false, "Solder, coatings.", Category::PostTransitionMetal, "[Kr] 4d¹⁰ 5s² 5p²"),
    element("Antimony", "Sb", 71, &[70, 72], Phase::Solid, false, "Lead batteries.", Category::Metalloid, "[Kr] 4d¹⁰ 5s² 5p³"),
    element("Tellurium", "Te", 76, &[70, 72, 73, 74, 75, 76, 78], Phase::Solid, false, "Metal alloys.", Category::Metalloid, "[Kr] 4d¹⁰ 5s² 5p⁴"),
    element("Iodine", "I", 74, &[74], Phase::Solid, false, "Antiseptics.", Category::Halogen, "[Kr] 4d¹⁰ 5s² 5p⁵"),
    element("Xenon", "Xe", 77, &[70, 72, 74, 75, 76, 77, 78, 80, 82], Phase::Gas, false, "HID car headlights.", Category::NobleGas, "[Kr] 4d¹⁰ 5s² 5p⁶"),
    element("Caesium", "Cs", 78, &[78], Phase::Solid, false, "Atomic clocks.", Category::AlkaliMetal, "[Xe] 6s¹"),
    element("Barium", "Ba", 81, &[74, 76, 78, 79, 80, 81, 82], Phase::Solid, false, "X-ray imaging.", Category::AlkalineEarthMetal, "[Xe] 6s²"),
    element("Lanthanum", "La", 82, &[82], Phase::Solid, false, "Camera lenses.", Category::Lanthanide, "[Xe] 5d¹ 6s²"),
    element("Cerium", "Ce", 82, &[78, 80, 82, 84], Phase::Solid, false, "Lighter flints.", Category::Lanthanide, "[Xe] 4f¹ 5d¹ 6s²"),
    element("Praseodymium", "Pr", 82, &[82], Phase::Solid, false, "Welding goggles.", Category::Lanthanide, "[Xe] 4f³ 6s²"),
    element("Neodymium", "Nd", 84, &[82, 83, 84, 85, 86, 88, 90], Phase::Solid, false, "Super-strong magnets.", Category::Lanthanide, "[Xe] 4f⁴ 6s²"),
    element("Promethium", "Pm", 84, &[], Phase::Solid, false, "Luminous paint.", Category::Lanthanide, "[Xe] 4f⁵ 6s²"),
    element("Samarium", "Sm", 88, &[82, 86, 87, 88, 90, 92, 94], Phase::Solid, false, "High-temperature magnets.", Category::Lanthanide, "[Xe] 4f⁶ 6s²"),
    element("Europium", "Eu", 89, &[88, 90], Phase::Solid, false, "TV screens (red).", Category::Lanthanide, "[Xe] 4f⁷ 6s²"),
    element("Gadolinium", "Gd", 94, &[90, 92, 93, 94, 96, 98], Phase::Solid, false, "MRI contrast agent.", Category::Lanthanide, "[Xe] 4f⁷ 5d¹ 6s²"),
    element("Terbium", "Tb", 96, &[94], Phase::Solid, false, "Screens (green).", Category::Lanthanide, "[Xe] 4f⁹ 6s²"),
    element("Dysprosium", "Dy", 99, &[94, 96, 97, 98, 99, 100, 102], Phase::Solid, false, "Hybrid motor magnets.", Category::Lanthanide, "[Xe] 4f¹⁰ 6s²"),
    element("Holmium", "Ho", 98, &[98], Phase::Solid, false, "Surgical lasers.", Category::Lanthanide, "[Xe] 4f¹¹ 6s²"),
    element("Erbium", "Er", 100, &[96, 98, 99, 100, 102, 104], Phase::Solid, false, "Optical fibre.", Category::Lanthanide, "[Xe] 4f¹² 6s²"),
    element("Thulium", "Tm", 100, &[100], Phase::Solid, false, "Portable X-ray machines.", Category::Lanthanide, "[Xe] 4f¹³ 6s²"),
    element("Ytterbium", "Yb", 103, &[100, 102, 103, 104, 106, 108], Phase::Solid, false, "Infrared lasers.", Category::Lanthanide, "[Xe] 4f¹⁴ 6s²"),
    element("Lutetium", "Lu", 106, &[106], Phase::Solid, false, "PET scan detectors.", Category::Lanthanide, "[Xe] 4f¹⁴ 5d¹ 6s²"),
    element("Hafnium", "Hf", 106, &[102, 104, 105, 106, 107, 108], Phase::Solid, false, "Nuclear reactors.", Category::TransitionMetal, "[Xe] 4f¹⁴ 5d² 6s²"),
    element("Tantalum", "Ta", 108, &[108], Phase::Solid, false, "Phone capacitors.", Category::TransitionMetal, "[Xe] 4f¹⁴ 5d³ 6s²"),
    element("Tungsten", "W", 110, &[108, 110, 111, 112, 114], Phase::Solid, false, "Light bulb filaments.", Category::TransitionMetal, "[Xe] 4f¹⁴ 5d⁴ 6s²"),
    element("Rhenium", "Re", 111, &[110, 112], Phase::Solid, false, "Jet engines.", Category::TransitionMetal, "[Xe] 4f¹⁴ 5d⁵ 6s²"),
    element("Osmium", "Os", 114, &[110, 112, 113, 114, 116, 118], Phase::Solid, false, "Pen nibs.", Category::TransitionMetal, "[Xe] 4f¹⁴ 5d⁶ 6s²"),
    element("Iridium", "Ir", 115, &[114, 116], Phase::Solid, false, "Spark plugs.", Category::TransitionMetal, "[Xe] 4f¹⁴ 5d⁷ 6s²"),
    element("Platinum", "Pt", 117, &[114, 115, 116, 117, 118, 120], Phase::Solid, false, "Jewellery, catalysts.", Category::TransitionMetal, "[Xe] 4f¹⁴ 5d⁹ 6s¹"),
    element("Gold", "Au", 118, &[118], Phase::Solid, false, "Jewellery, electronics.", Category::TransitionMetal, "[Xe] 4f¹⁴ 5d¹⁰ 6s¹"),
    element("Mercury", "Hg", 122, &[118, 120, 121, 122, 124, 126], Phase::Liquid, false, "Thermometers (formerly).", Category::TransitionMetal, "[Xe] 4f¹⁴ 5d¹⁰ 6s²"),
    element("Thallium", "Tl", 123, &[122, 124], Phase::Solid, false, "Infrared detectors.", Category::PostTransitionMetal, "[Xe] 4f¹⁴ 5d¹⁰ 6s² 6p¹"),
    element("Lead", "Pb", 126, &[124, 125, 126, 127, 128], Phase::Solid, false, "Car batteries.", Category::PostTransitionMetal, "[Xe] 4f¹⁴ 5d¹⁰ 6s² 6p²"),
    element("Bismuth", "Bi", 126, &[126], Phase::Solid, false, "Stomach remedies.", Category::PostTransitionMetal, "[Xe] 4f¹⁴ 5d¹⁰ 6s² 6p³"),
    element("Polonium", "Po", 125, &[], Phase::Solid, false, "Satellite heaters.", Category::PostTransitionMetal, "[Xe] 4f¹⁴ 5d¹⁰ 6s² 6p⁴"),
    element("Astatine", "At", 125, &[], Phase::Solid, false, "Cancer therapy.", Category::Halogen, "[Xe] 4f¹⁴ 5d¹⁰ 6s² 6p⁵"),
    element("Radon", "Rn", 136, &[], Phase::Gas, false, "Radiation therapy.", Category::NobleGas, "[Xe] 4f¹⁴ 5d¹⁰ 6s² 6p⁶"),
    element("Francium", "Fr", 136, &[], Phase::Solid, false, "Scientific research.", Category::AlkaliMetal, "[Rn] 7s¹"),
    element("Radium", "Ra", 138, &[], Phase::Solid, false, "Luminous watch paint (formerly).", Category::AlkalineEarthMetal, "[Rn] 7s²"),
    element("Actinium", "Ac", 138, &[], Phase::Solid, false, "Neutron sources.", Category::Actinide, "[Rn] 6d¹ 7s²"),
    element("Thorium", "Th", 142, &[], Phase::Solid, false, "Nuclear fuel.", Category::Actinide, "[Rn] 6d² 7s²"),
    element("Protactinium", "Pa", 140, &[], Phase::Solid, false, "Scientific research.", Category::Actinide, "[Rn] 5f² 6d¹ 7s²"),
    element("Uranium", "U", 146, &[], Phase::Solid, false, "Nuclear fuel.", Category::Actinide, "[Rn] 5f³ 6d¹ 7s²"),
    element("Neptunium", "Np", 146, &[], Phase::Solid, false, "Scientific research.", Category::Actinide, "[Rn] 5f⁴ 6d¹ 7s²"),
    element("Plutonium", "Pu", 150, &[], Phase::Solid, false, "Nuclear weapons, power sources.", Category::Actinide, "[Rn] 5f⁶ 7s²"),
    element("Americium", "Am", 152, &[], Phase::Solid, false, "Smoke detectors.", Category::Actinide, "[Rn] 5f⁷ 7s²"),
    element("Curium", "Cm", 153, &[], Phase::Solid, false, "Scientific research.", Category::Actinide, "[Rn] 5f⁷ 6d¹ 7s²"),
    element("Berkelium", "Bk", 152, &[], Phase::Solid, false, "Scientific research.", Category::Actinide, "[Rn] 5f⁹ 7s²"),
    element("Californium", "Cf", 153, &[], Phase::Solid, false, "Starting nuclear reactors.", Category::Actinide, "[Rn] 5f¹⁰ 7s²"),
    element("Einsteinium", "Es", 155, &[], Phase::Solid, false, "Scientific research.", Category::Actinide, "[Rn] 5f¹¹ 7s²"),
    element("Fermium", "Fm", 158, &[], Phase::Solid, false, "Scientific research.", Category::Actinide, "[Rn] 5f¹² 7s²"),
    element("Mendelevium", "Md", 159, &[], Phase::Solid, false, "Scientific research.", Category::Actinide, "[Rn] 5f¹³ 7s²"),
    element("Nobelium", "No", 159, &[], Phase::Solid, false, "Scientific research.", Category::Actinide, "[Rn] 5f¹⁴ 7s²"),
    element("Lawrencium", "Lr", 161, &[], Phase::Solid, false, "Scientific research.", Category::Actinide, "[Rn] 5f¹⁴ 7s² 7p¹"),
    element("Rutherfordium", "Rf", 163, &[], Phase::Solid, false, "Scientific research.", Category::TransitionMetal, "[Rn] 5f¹⁴ 6d² 7s²"),
    element("Dubnium", "Db", 165, &[], Phase::Solid, false, "Scientific research.", Category::TransitionMetal, "[Rn] 5f¹⁴ 6d³ 7s²"),
    element("Seaborgium", "Sg", 167, &[], Phase::Solid, false, "Scientific research.", Category::TransitionMetal, "[Rn] 5f¹⁴ 6d⁴ 7s²"),
    element("Bohrium", "Bh", 165, &[], Phase::Solid, false, "Scientific research.", Category::TransitionMetal, "[Rn] 5f¹⁴ 6d⁵ 7s²"),
    element("Hassium", "Hs", 169, &[], Phase::Solid, false, "Scientific research.", Category::TransitionMetal, "[Rn] 5f¹⁴ 6d⁶ 7s²"),
    element("Meitnerium", "Mt", 170, &[], Phase::Solid, false, "Scientific research.", Category::TransitionMetal, "[Rn] 5f¹⁴ 6d⁷ 7s²"),
    element("Darmstadtium", "Ds", 172, &[], Phase::Solid, false, "Scientific research.", Category::TransitionMetal, "[Rn] 5f¹⁴ 6d⁸ 7s²"),
    element("Roentgenium", "Rg", 171, &[], Phase::Solid, false, "Scientific research.", Category::TransitionMetal, "[Rn] 5f¹⁴ 6d⁹ 7s²"),
    element("Copernicium", "Cn", 173, &[], Phase::Gas, true, "Scientific research.", Category::TransitionMetal, "[Rn] 5f¹⁴ 6d¹⁰ 7s²"),
    element("Nihonium", "Nh", 173, &[], Phase::Solid, true, "Scientific research.", Category::PostTransitionMetal, "[Rn] 5f¹⁴ 6d¹⁰ 7s² 7p¹"),
    element("Flerovium", "Fl", 175, &[], Phase::Solid, true, "Scientific research.", Category::PostTransitionMetal, "[Rn] 5f¹⁴ 6d¹⁰ 7s² 7p²"),
    element("Moscovium", "Mc", 174, &[], Phase::Solid, true, "Scientific research.", Category::PostTransitionMetal, "[Rn] 5f¹⁴ 6d¹⁰ 7s² 7p³"),
    element("Livermorium", "Lv", 177, &[], Phase::Solid, true, "Scientific research.", Category::PostTransitionMetal, "[Rn] 5f¹⁴ 6d¹⁰ 7s² 7p⁴"),
    element("Tennessine", "Ts", 177, &[], Phase::Solid, true, "Scientific research.", Category::Halogen, "[Rn] 5f¹⁴ 6d¹⁰ 7s² 7p⁵"),
    element("Oganesson", "Og", 176, &[], Phase::Gas, true, "Scientific research.", Category::NobleGas, "[Rn] 5f¹⁴ 6d¹⁰ 7s² 7p⁶"),
];

static SYMBOL_INDEX: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    ELEMENTS
        .iter()
        .enumerate()
        .map(|(i, record)| (record.symbol, i as u32 + 1))
        .collect()
});

pub fn element_for_z(z: u32) -> Option<&'static ElementRecord> {
    ELEMENTS.get((z as usize).checked_sub(1)?)
}

pub fn symbol_for_z(z: u32) -> Option<&'static str> {
    element_for_z(z).map(|record| record.symbol)
}

/// Atomic number for a symbol, case-sensitive (`"Co"` is not `"CO"`).
pub fn z_for_symbol(symbol: &str) -> Option<u32> {
    SYMBOL_INDEX.get(symbol).copied()
}

/// Resolve an element by atomic number (`"26"`) or symbol (`"Fe"`).
pub fn lookup(id: &str) -> Option<(u32, &'static ElementRecord)> {
    let z = match id.parse::<u32>() {
        Ok(z) => z,
        Err(_) => z_for_symbol(id)?,
    };
    element_for_z(z).map(|record| (z, record))
}

/// Typical neutron count for `z`, or 0 outside the table.
pub fn typical_neutrons(z: u32) -> u32 {
    element_for_z(z).map_or(0, |record| record.typical_neutrons)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stability {
    Stable,
    Unstable,
    /// Beyond [`RADIOACTIVE_THRESHOLD`]; neutron count is irrelevant.
    Radioactive,
}

pub fn classify_stability(protons: u32, neutrons: u32) -> Stability {
    if protons > RADIOACTIVE_THRESHOLD {
        return Stability::Radioactive;
    }
    match element_for_z(protons) {
        Some(record) if record.stable_neutrons.contains(&neutrons) => Stability::Stable,
        _ => Stability::Unstable,
    }
}

/// Everything the atom info panel shows for the current counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtomInfo {
    pub name: String,
    pub symbol: Option<&'static str>,
    pub atomic_number: u32,
    pub mass_number: u32,
    pub isotope: String,
    pub charge: String,
    pub phase: String,
    pub usage: String,
    pub configuration: String,
    pub category: Option<Category>,
    pub stability: Stability,
    /// Electrons per shell, innermost first.
    pub shells: Vec<usize>,
}

impl AtomInfo {
    pub fn describe(protons: u32, neutrons: u32, electrons: u32) -> Self {
        let record = element_for_z(protons);
        let name = record.map_or_else(|| format!("Element #{protons}"), |r| r.name.to_string());
        let mass_number = protons + neutrons;
        let charge = protons as i64 - electrons as i64;
        AtomInfo {
            isotope: format!("{name}-{mass_number}"),
            name,
            symbol: symbol_for_z(protons),
            atomic_number: protons,
            mass_number,
            charge: if charge > 0 {
                format!("+{charge}")
            } else {
                charge.to_string()
            },
            phase: record.map_or_else(|| "-".to_string(), ElementRecord::phase_label),
            usage: record.map_or("-", |r| r.usage).to_string(),
            configuration: record.map_or("-", |r| r.configuration).to_string(),
            category: record.map(|r| r.category),
            stability: classify_stability(protons, neutrons),
            shells: shell_occupancy(electrons as usize),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup() {
        assert_eq!(symbol_for_z(1), Some("H"));
        assert_eq!(symbol_for_z(26), Some("Fe"));
        assert_eq!(symbol_for_z(118), Some("Og"));
        assert_eq!(symbol_for_z(0), None);
        assert_eq!(symbol_for_z(119), None);
        assert_eq!(z_for_symbol("U"), Some(92));
        assert_eq!(z_for_symbol("Xx"), None);
        assert_eq!(typical_neutrons(92), 146);
        assert_eq!(typical_neutrons(200), 0);
    }

    #[test]
    fn test_lookup_by_number_or_symbol() {
        assert_eq!(lookup("26").map(|(z, r)| (z, r.symbol)), Some((26, "Fe")));
        assert_eq!(lookup("Fe").map(|(z, r)| (z, r.name)), Some((26, "Iron")));
        assert_eq!(lookup("Og").map(|(z, _)| z), Some(118));
        assert!(lookup("fe").is_none());
        assert!(lookup("0").is_none());
        assert!(lookup("119").is_none());
    }

    #[test]
    fn test_symbols_are_unique() {
        assert_eq!(SYMBOL_INDEX.len(), ELEMENTS.len());
        for (i, record) in ELEMENTS.iter().enumerate() {
            assert_eq!(z_for_symbol(record.symbol), Some(i as u32 + 1));
        }
    }

    #[test]
    fn test_stability_classification() {
        assert_eq!(classify_stability(6, 6), Stability::Stable);
        assert_eq!(classify_stability(6, 5), Stability::Unstable);
        assert_eq!(classify_stability(90, 142), Stability::Radioactive);
        for neutrons in 0..=180 {
            assert_ne!(classify_stability(90, neutrons), Stability::Stable);
        }
        // Technetium has no stable isotope at all
        assert_eq!(classify_stability(43, 55), Stability::Unstable);
        // Bismuth sits right at the threshold and is still looked up
        assert_eq!(classify_stability(83, 126), Stability::Stable);
    }

    #[test]
    fn test_atom_info() {
        let info = AtomInfo::describe(6, 6, 6);
        assert_eq!(info.name, "Carbon");
        assert_eq!(info.mass_number, 12);
        assert_eq!(info.isotope, "Carbon-12");
        assert_eq!(info.charge, "0");
        assert_eq!(info.phase, "Solid");
        assert_eq!(info.stability, Stability::Stable);
        assert_eq!(info.shells, vec![2, 4]);

        let ion = AtomInfo::describe(11, 12, 10);
        assert_eq!(ion.charge, "+1");
        let anion = AtomInfo::describe(17, 18, 18);
        assert_eq!(anion.charge, "-1");

        assert_eq!(AtomInfo::describe(118, 176, 118).phase, "Gas (predicted)");
    }

    #[test]
    fn test_out_of_table_placeholder() {
        let info = AtomInfo::describe(130, 0, 0);
        assert_eq!(info.name, "Element #130");
        assert_eq!(info.symbol, None);
        assert_eq!(info.usage, "-");
        assert_eq!(info.stability, Stability::Radioactive);
        assert!(info.shells.is_empty());
    }
}
