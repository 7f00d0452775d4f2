//! Writes `sample_points.csv`: coordinate clusters around a few cities with
//! mixed header casing and a handful of dirty rows, for exercising the
//! viewer by hand.

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

fn main() {
    let mut rng = SimpleRng::new(42);

    let cities: [(&str, f64, f64); 4] = [
        ("Lisbon", 38.7223, -9.1393),
        ("São Paulo", -23.5505, -46.6333),
        ("Luanda", -8.8390, 13.2894),
        ("Maputo", -25.9692, 32.5732),
    ];

    let output_path = "sample_points.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    // Mixed casing on purpose: the viewer must accept it.
    writer
        .write_record(["Latitude", "LONGITUDE", "Name"])
        .expect("Failed to write header");

    let mut rows = 0usize;
    for (city, lat, lon) in cities {
        for i in 0..15 {
            let p_lat = rng.gauss(lat, 0.08);
            let p_lon = rng.gauss(lon, 0.08);
            writer
                .write_record([
                    format!("{p_lat:.5}"),
                    format!("{p_lon:.5}"),
                    format!("{city} #{i}"),
                ])
                .expect("Failed to write record");
            rows += 1;
        }
    }

    // Dirty rows: these must be dropped by the viewer, not crash it.
    for record in [
        ["", "12.5", "missing latitude"],
        ["41.2", "", "missing longitude"],
        ["n/a", "n/a", "not numeric"],
    ] {
        writer
            .write_record(record)
            .expect("Failed to write record");
        rows += 1;
    }

    writer.flush().expect("Failed to flush output file");

    println!("Wrote {rows} rows to {output_path}");
}
