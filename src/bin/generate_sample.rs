use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

const YEARS: [i32; 3] = [2018, 2019, 2020];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// (group, baseline rate). "Other" is not a plotted race and checks that the
/// viewer drops it.
const RACE_GROUPS: [(&str, f64); 5] = [
    ("White", 0.072),
    ("Black", 0.138),
    ("Latinx", 0.104),
    ("Asian", 0.061),
    ("Other", 0.095),
];

const AGE_GROUPS: [(&str, f64); 3] = [
    ("Youth 18-26", 0.118),
    ("Youth 27-34", 0.068),
    ("Total 18+", 0.046),
];

#[derive(Serialize)]
struct Row<'a> {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Month")]
    month: &'a str,
    #[serde(rename = "Group")]
    group: &'a str,
    #[serde(rename = "Unemployment Rate")]
    rate: f64,
}

/// Multiplier applied to the baseline: flat before 2020, then a spring 2020
/// spike that decays over the rest of the year.
fn shock(year: i32, month: usize) -> f64 {
    if year < 2020 || month < 3 {
        return 1.0;
    }
    let months_since = (month - 3) as f64;
    1.0 + 1.6 * (-months_since / 4.0).exp()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn write_table(path: &Path, groups: &[(&str, f64)], rng: &mut SimpleRng) -> Result<usize> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;

    let mut rows = 0;
    for year in YEARS {
        for (m, &month) in MONTHS.iter().enumerate() {
            for &(group, base) in groups {
                let rate = rng.gauss(base * shock(year, m), base * 0.05).clamp(0.005, 0.6);
                writer
                    .serialize(Row {
                        year,
                        month,
                        group,
                        rate: (rate * 10_000.0).round() / 10_000.0,
                    })
                    .with_context(|| format!("writing {}", path.display()))?;
                rows += 1;
            }
        }
    }
    writer
        .flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(rows)
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);

    for (name, groups) in [
        ("unemployment_by_race.csv", &RACE_GROUPS[..]),
        ("unemployment_by_age.csv", &AGE_GROUPS[..]),
    ] {
        let path = out_dir.join(name);
        let rows = write_table(&path, groups, &mut rng)?;
        println!("Wrote {rows} rows to {}", path.display());
    }
    Ok(())
}
