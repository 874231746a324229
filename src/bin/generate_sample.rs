//! Writes a deterministic phone catalogue as `sample_phones.csv`,
//! `sample_phones.json` and `sample_phones.parquet` in the current directory.

use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Phone {
    name: String,
    brand: String,
    price: i64,
    rating: f64,
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

    fn range(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }
}

fn catalogue() -> Vec<Phone> {
    let mut phones: Vec<Phone> = [
        ("iphone 15 pro", "apple", 999, 4.9),
        ("galaxy s23 ultra", "samsung", 1199, 4.8),
        ("redmi note 12", "xiaomi", 199, 4.6),
        ("poco x5 pro", "xiaomi", 299, 4.4),
    ]
    .into_iter()
    .map(|(name, brand, price, rating)| Phone {
        name: name.to_string(),
        brand: brand.to_string(),
        price,
        rating,
    })
    .collect();

    let mut rng = SimpleRng::new(42);
    let lines = [
        ("apple", "iphone", 599.0, 1399.0),
        ("samsung", "galaxy a", 149.0, 499.0),
        ("xiaomi", "redmi", 99.0, 349.0),
        ("google", "pixel", 399.0, 1099.0),
    ];
    for (brand, line, low, high) in lines {
        for model in 1..=4 {
            let rating = (rng.range(3.8, 5.0) * 10.0).round() / 10.0;
            phones.push(Phone {
                name: format!("{line} {}", model * 10 + 1),
                brand: brand.to_string(),
                price: rng.range(low, high).round() as i64,
                rating,
            });
        }
    }
    phones
}

fn write_csv(phones: &[Phone], path: &str) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    for phone in phones {
        writer.serialize(phone)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(phones: &[Phone], path: &str) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {path}"))?;
    serde_json::to_writer_pretty(file, phones)?;
    Ok(())
}

fn write_parquet(phones: &[Phone], path: &str) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("name", DataType::Utf8, false),
        Field::new("brand", DataType::Utf8, false),
        Field::new("price", DataType::Int64, false),
        Field::new("rating", DataType::Float64, false),
    ]));

    let columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from_iter_values(phones.iter().map(|p| p.name.as_str()))),
        Arc::new(StringArray::from_iter_values(phones.iter().map(|p| p.brand.as_str()))),
        Arc::new(Int64Array::from_iter_values(phones.iter().map(|p| p.price))),
        Arc::new(Float64Array::from_iter_values(phones.iter().map(|p| p.rating))),
    ];
    let batch = RecordBatch::try_new(schema.clone(), columns).context("building record batch")?;

    let file = File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

fn main() -> Result<()> {
    let phones = catalogue();

    write_csv(&phones, "sample_phones.csv")?;
    write_json(&phones, "sample_phones.json")?;
    write_parquet(&phones, "sample_phones.parquet")?;

    println!(
        "Wrote {} phones to sample_phones.{{csv,json,parquet}}",
        phones.len()
    );
    Ok(())
}
