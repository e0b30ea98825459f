use crate::registry::TableDef;
use log::{debug, trace};
use std::io::Write;

/// Rounded values of `table`, from `min` to `max` inclusive.
/// Halves are rounded away from zero.
pub fn values(table: &TableDef) -> Vec<i64> {
    debug!("Evaluating {} on {}..={}", table.name, table.min, table.max);
    (table.min..=table.max)
        .map(|x| {
            let y = table.eval(x);
            trace!("{}\t{}\t{}", x, y, y.round());
            y.round() as i64
        })
        .collect()
}

/// Write the table as comma-separated integers. No trailing separator or newline.
pub fn write_table<W: Write>(table: &TableDef, wtr: &mut W) -> std::io::Result<()> {
    let values = values(table);
    for (i, v) in values.iter().enumerate() {
        if 0 < i {
            wtr.write_all(b",")?;
        }
        write!(wtr, "{}", v)?;
    }
    debug!("Wrote {} values", values.len());
    Ok(())
}

pub fn render(table: &TableDef) -> String {
    let values: Vec<_> = values(table).iter().map(|x| format!("{}", x)).collect();
    values.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    fn square(x: i64) -> f64 {
        (x * x) as f64 / 2.
    }
    #[test]
    fn small_table() {
        let t = TableDef::new("half_square", "x^2/2", (-2, 3), square);
        assert_eq!(values(&t), vec![2, 1, 0, 1, 2, 5]);
        assert_eq!(render(&t), "2,1,0,1,2,5");
        let mut buf = vec![];
        write_table(&t, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "2,1,0,1,2,5");
    }
    #[test]
    fn single_entry() {
        let t = TableDef::new("one", "constant", (7, 7), |_| 41.6);
        assert_eq!(render(&t), "42");
    }
    #[test]
    fn halves_round_away_from_zero() {
        let t = TableDef::new("halves", "x - 0.5", (-1, 2), |x| x as f64 - 0.5);
        assert_eq!(values(&t), vec![-2, -1, 1, 2]);
    }
    #[test]
    fn pwm_endpoints() {
        let registry = Registry::builtin();
        let pwm = values(registry.get("pwm_1024").unwrap());
        assert_eq!(pwm.len(), 1024);
        assert_eq!(pwm[0], 0);
        assert_eq!(pwm[1023], 1023);
        let pwm = values(registry.get("pwm_65536").unwrap());
        assert_eq!(pwm[0], 0);
        assert!((pwm[1023] - 65535).abs() <= 1, "{}", pwm[1023]);
        let linear = values(registry.get("pwm_linear").unwrap());
        assert_eq!((linear[0], linear[1023]), (0, 65535));
    }
    #[test]
    fn write_matches_render() {
        for t in Registry::builtin().iter() {
            let mut buf = vec![];
            write_table(t, &mut buf).unwrap();
            assert_eq!(String::from_utf8(buf).unwrap(), render(t));
        }
    }
}
