//! Human readable rendering of quantities.

use crate::quantity::Quantity;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Lookup tables consulted when rendering a quantity for people.
///
/// `units` is keyed by the comma separated unit vector (`"-2,2,1,0,0,0,0"`)
/// and `prefixes` by scale. Missing entries fall back to base unit symbols
/// and a `*10^n` factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayTables {
    #[serde(default)]
    pub units: HashMap<String, String>,
    #[serde(default)]
    pub prefixes: BTreeMap<i32, String>,
}

impl DisplayTables {
    pub fn empty() -> Self {
        DisplayTables {
            units: HashMap::new(),
            prefixes: BTreeMap::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn unit_symbol(&self, quantity: &Quantity) -> Option<&str> {
        self.units
            .get(&quantity.unit().to_string())
            .map(String::as_str)
    }

    pub fn prefix(&self, scale: i32) -> Option<&str> {
        self.prefixes.get(&scale).map(String::as_str)
    }
}

impl Default for DisplayTables {
    fn default() -> Self {
        let units = [
            ("-2,2,1,0,0,0,0", "J"),
            ("-3,2,1,0,0,0,0", "W"),
            ("1,0,0,1,0,0,0", "C"),
            ("-3,2,1,-1,0,0,0", "V"),
            ("-2,1,1,0,0,0,0", "N"),
            ("-2,-1,1,0,0,0,0", "Pa"),
            ("-1,0,0,0,0,0,0", "Hz"),
        ];
        let prefixes = [
            (9, "G"),
            (6, "M"),
            (3, "k"),
            (2, "h"),
            (1, "da"),
            (0, ""),
            (-1, "d"),
            (-2, "c"),
            (-3, "m"),
            (-6, "μ"),
            (-9, "n"),
        ];
        DisplayTables {
            units: units
                .into_iter()
                .map(|(key, symbol)| (key.to_string(), symbol.to_string()))
                .collect(),
            prefixes: prefixes
                .into_iter()
                .map(|(scale, prefix)| (scale, prefix.to_string()))
                .collect(),
        }
    }
}

impl Quantity {
    /// Renders e.g. `21.37km`, `10MJ`, `0.5kg` or `1kg^(2)`.
    ///
    /// With `force_si` the unit is always spelled in base units, even when
    /// the tables know a symbol for it. The scale of a dimensionless
    /// quantity is not shown. A bare kilogram is gram-based, so its scale
    /// prefixes `g`.
    pub fn to_verbose_string(&self, tables: &DisplayTables, force_si: bool) -> String {
        let mut rendered = self.magnitude().to_string();
        let symbol = tables.unit_symbol(self).filter(|_| !force_si);
        if self.unit().is_kilogram() && symbol.is_none() {
            push_prefix(&mut rendered, tables, self.scale());
            rendered.push('g');
            return rendered;
        }
        if !self.is_dimensionless() {
            push_prefix(&mut rendered, tables, self.scale());
        }
        match symbol {
            Some(symbol) => rendered.push_str(symbol),
            None => {
                for (dimension, exponent) in self.unit().components() {
                    rendered.push_str(dimension.symbol());
                    if exponent != 1 {
                        rendered.push_str(&format!("^({})", exponent));
                    }
                }
            }
        }
        rendered
    }
}

fn push_prefix(rendered: &mut String, tables: &DisplayTables, scale: i32) {
    if scale == 0 {
        return;
    }
    match tables.prefix(scale) {
        Some(prefix) => rendered.push_str(prefix),
        None => rendered.push_str(&format!("*10^{}", scale)),
    }
}
