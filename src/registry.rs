//! Named lookup tables.
//! Each table is an inclusive integer domain [min, max] and a function evaluated on it.
//! Names are matched case-insensitively; the registry keeps them in lower case.
use crate::error::UnknownTableError;
use log::debug;

/// The table used when no name is given.
pub const DEFAULT_TABLE: &str = "pwm_1024";

#[derive(Debug, Clone, Copy)]
pub struct TableDef {
    pub name: &'static str,
    pub description: &'static str,
    pub min: i64,
    pub max: i64,
    pub f: fn(i64) -> f64,
}

impl TableDef {
    pub fn new(
        name: &'static str,
        description: &'static str,
        (min, max): (i64, i64),
        f: fn(i64) -> f64,
    ) -> Self {
        assert!(min <= max, "{}: empty domain {}..={}", name, min, max);
        Self {
            name,
            description,
            min,
            max,
            f,
        }
    }
    /// Number of entries, `max - min + 1`.
    pub fn len(&self) -> usize {
        (self.max - self.min + 1) as usize
    }
    pub fn is_empty(&self) -> bool {
        self.max < self.min
    }
    pub fn eval(&self, x: i64) -> f64 {
        (self.f)(x)
    }
}

fn pwm_1024(x: i64) -> f64 {
    0.000977517 * (x as f64).powi(2)
}

fn pwm_65536(x: i64) -> f64 {
    0.0626213 * (x as f64).powi(2)
}

fn pwm_linear(x: i64) -> f64 {
    (65535. / 1023.) * x as f64
}

fn sin(x: i64) -> f64 {
    ((x as f64 * 2. * std::f64::consts::PI / 1023.).sin() + 1.) * 1023. / 2.
}

#[derive(Debug, Clone)]
pub struct Registry {
    // Registration order. Names are lower case.
    tables: Vec<TableDef>,
    default: usize,
}

impl Registry {
    pub fn builtin() -> Self {
        let tables = vec![
            TableDef::new("pwm_1024", "quadratic PWM ramp, 10-bit output", (0, 1023), pwm_1024),
            TableDef::new("pwm_65536", "quadratic PWM ramp, 16-bit output", (0, 1023), pwm_65536),
            TableDef::new("pwm_linear", "linear PWM ramp, 16-bit output", (0, 1023), pwm_linear),
            TableDef::new("sin", "first quarter of a sine wave scaled to 0..1023", (0, 255), sin),
        ];
        Self::with_default(tables, DEFAULT_TABLE)
    }
    /// Build a registry from `tables`, selecting `default` as the fallback entry.
    /// Panic if `default` is not one of the tables or a name is registered twice.
    pub fn with_default(tables: Vec<TableDef>, default: &str) -> Self {
        for (i, t) in tables.iter().enumerate() {
            assert_eq!(t.name, t.name.to_lowercase(), "table names are lower case");
            assert!(
                tables[..i].iter().all(|s| s.name != t.name),
                "{} registered twice",
                t.name
            );
        }
        let default = tables
            .iter()
            .position(|t| t.name == default)
            .unwrap_or_else(|| panic!("default table {} is not registered", default));
        Self { tables, default }
    }
    pub fn get(&self, name: &str) -> Result<&TableDef, UnknownTableError> {
        let key = name.to_lowercase();
        debug!("Lookup {}", key);
        self.tables
            .iter()
            .find(|t| t.name == key)
            .ok_or_else(|| UnknownTableError::new(name))
    }
    pub fn default_table(&self) -> &TableDef {
        &self.tables[self.default]
    }
    /// `None` selects the default table.
    pub fn resolve(&self, name: Option<&str>) -> Result<&TableDef, UnknownTableError> {
        match name {
            Some(name) => self.get(name),
            None => Ok(self.default_table()),
        }
    }
    pub fn iter(&self) -> impl Iterator<Item = &TableDef> {
        self.tables.iter()
    }
    pub fn names(&self) -> Vec<&'static str> {
        self.tables.iter().map(|t| t.name).collect()
    }
}
