//! Writes a deterministic pair of sample sensor CSVs into `data/` so the
//! dashboard has something to show out of the box:
//! `data/AC01-1400057.csv` (acoustic spectrum + level readings, 1 Hz) and
//! `data/pressures.csv` (four pressure channels).

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// Third-octave band centers reported by the acoustic sensor, 25 Hz – 10 kHz.
const BANDS: [f64; 27] = [
    25.0, 31.5, 40.0, 50.0, 63.0, 80.0, 100.0, 125.0, 160.0, 200.0, 250.0, 315.0, 400.0, 500.0,
    630.0, 800.0, 1000.0, 1250.0, 1600.0, 2000.0, 2500.0, 3150.0, 4000.0, 5000.0, 6300.0, 8000.0,
    10000.0,
];

const ROWS: usize = 600;

fn band_column(hz: f64) -> String {
    if hz.fract() == 0.0 {
        format!("f{}", hz as u32)
    } else {
        format!("f{hz}")
    }
}

fn gaussian(x: f64, mu: f64, sigma: f64) -> f64 {
    (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Broadband roll-off with a slowly wandering resonance around 1 kHz.
fn band_amplitude(hz: f64, t: f64) -> f64 {
    let rolloff = 90.0 - 12.0 * (hz / 25.0).log10();
    let resonance_hz = 1000.0 * (1.0 + 0.2 * (t / 120.0).sin());
    let resonance = 18.0 * gaussian(hz.log10(), resonance_hz.log10(), 0.12);
    rolloff + resonance
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

fn write_acoustic(start: NaiveDateTime, rng: &mut SimpleRng) {
    let path = "data/AC01-1400057.csv";
    let mut writer = csv::Writer::from_path(path).expect("Failed to create acoustic CSV");

    let mut header: Vec<String> = vec!["receipt_time".to_string()];
    header.extend(BANDS.iter().map(|&hz| band_column(hz)));
    header.push("level_contact".to_string());
    header.push("level_ambient".to_string());
    writer.write_record(&header).expect("Failed to write header");

    let mut contact = 62.0;
    let mut ambient = 48.0;
    for i in 0..ROWS {
        let ts = start + TimeDelta::seconds(i as i64);
        let mut record: Vec<String> = vec![ts.format("%Y-%m-%d %H:%M:%S").to_string()];
        for &hz in &BANDS {
            let amp = band_amplitude(hz, i as f64) + rng.gauss(0.0, 1.2);
            record.push(format!("{amp:.2}"));
        }
        contact += rng.gauss(0.0, 0.4);
        ambient += rng.gauss(0.0, 0.25);
        record.push(format!("{contact:.2}"));
        record.push(format!("{ambient:.2}"));
        writer.write_record(&record).expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush acoustic CSV");

    println!("Wrote {ROWS} acoustic rows ({} bands) to {path}", BANDS.len());
}

fn write_pressures(start: NaiveDateTime, rng: &mut SimpleRng) {
    const CHANNELS: [(&str, f64); 4] = [
        ("Total Pressure Upstream (psi)", 3180.0),
        ("Total Pressure Downstream (psi)", 2950.0),
        ("Static Pressure Upstream (psi)", 3120.0),
        ("Static Pressure Downstream (psi)", 2890.0),
    ];

    let path = "data/pressures.csv";
    let mut writer = csv::Writer::from_path(path).expect("Failed to create pressure CSV");

    let mut header: Vec<String> = vec!["Receipt_time".to_string()];
    header.extend(CHANNELS.iter().map(|&(name, _)| name.to_string()));
    writer.write_record(&header).expect("Failed to write header");

    for i in 0..ROWS {
        let ts = start + TimeDelta::seconds(i as i64);
        let mut record: Vec<String> = vec![ts.format("%Y-%m-%d %H:%M:%S").to_string()];
        for (k, &(_, base)) in CHANNELS.iter().enumerate() {
            let drift = 25.0 * (i as f64 / 90.0 + k as f64).sin();
            let value = base + drift + rng.gauss(0.0, 3.0);
            record.push(format!("{value:.3}"));
        }
        writer.write_record(&record).expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush pressure CSV");

    println!("Wrote {ROWS} pressure rows to {path}");
}

fn main() {
    let mut rng = SimpleRng::new(42);
    std::fs::create_dir_all("data").expect("Failed to create data directory");

    let start = NaiveDate::from_ymd_opt(2024, 3, 18)
        .expect("valid date")
        .and_hms_opt(9, 0, 0)
        .expect("valid time");

    write_acoustic(start, &mut rng);
    write_pressures(start, &mut rng);
}
