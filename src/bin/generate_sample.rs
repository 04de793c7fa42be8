//! Writes a small synthetic CSV in the dataset's schema, for offline demos
//! and tests. Usage: `generate_sample [out_path] [rows] [dim]`.

use anyhow::{Context, Result};

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

    /// Uniform in [-1, 1)
    fn next_unit(&mut self) -> f64 {
        let u = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        u * 2.0 - 1.0
    }
}

fn random_vector(rng: &mut SimpleRng, dim: usize) -> Vec<f64> {
    (0..dim).map(|_| (rng.next_unit() * 1e4).round() / 1e4).collect()
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let out_path = args.get(1).map(String::as_str).unwrap_or("sample_articles.csv");
    let rows: usize = args
        .get(2)
        .map(|s| s.parse().context("rows must be an integer"))
        .transpose()?
        .unwrap_or(50);
    let dim: usize = args
        .get(3)
        .map(|s| s.parse().context("dim must be an integer"))
        .transpose()?
        .unwrap_or(8);

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(out_path)
        .with_context(|| format!("creating {out_path}"))?;

    writer.write_record([
        "id",
        "url",
        "title",
        "text",
        "title_vector",
        "content_vector",
        "vector_id",
    ])?;

    for i in 0..rows {
        let title_vector = serde_json::to_string(&random_vector(&mut rng, dim))?;
        let content_vector = serde_json::to_string(&random_vector(&mut rng, dim))?;
        writer.write_record([
            i.to_string(),
            format!("https://en.wikipedia.org/wiki/Article_{i}"),
            format!("Article {i}"),
            format!("Body text of article {i}."),
            title_vector,
            content_vector,
            i.to_string(),
        ])?;
    }
    writer.flush()?;

    println!("Wrote {rows} rows ({dim}-dim vectors) to {out_path}");
    Ok(())
}
