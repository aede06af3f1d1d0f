//! Terminal and JSON rendering of valuation results.

use anyhow::Result;
use rust_decimal::Decimal;
use serde_json::{Value, json};

use deprecia_core::batch::{BatchEntry, BatchOutcome};
use deprecia_core::catalog::InMemoryCatalog;
use deprecia_core::depreciation::{AssetRecord, DepreciationResult};
use deprecia_shared::types::{Money, format_grouped};

const FACTOR_PLACES: u32 = 4;
const INDEX_PLACES: u32 = 5;

/// Projected book value at one offset.
pub struct Projection {
    /// Years since acquisition.
    pub offset: Decimal,
    /// Closed-form value.
    pub exact: Decimal,
    /// Value from the fitted line, absent when the fit failed.
    pub fitted: Option<Decimal>,
}

fn bob(amount: Decimal, decimal_places: u32) -> String {
    Money::bob(amount).format(decimal_places)
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_catalog(catalog: &InMemoryCatalog, as_json: bool) -> Result<()> {
    if as_json {
        return print_json(&catalog.entries());
    }

    let width = catalog
        .names()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Asset type".len());

    println!("{:<width$}  Useful life", "Asset type");
    println!("{}", "-".repeat(width + 13));
    for asset_type in catalog.entries() {
        println!(
            "{:<width$}  {:>3} years",
            asset_type.name, asset_type.useful_life_years
        );
    }
    println!();
    println!("{} asset types", catalog.len());
    Ok(())
}

pub fn print_result(
    record: &AssetRecord,
    result: &DepreciationResult,
    with_schedule: bool,
    decimal_places: u32,
    as_json: bool,
) -> Result<()> {
    if as_json {
        return print_json(&json!({
            "asset_type": record.asset_type_name,
            "result": result,
        }));
    }

    print_summary(record, result, decimal_places);
    if with_schedule {
        println!();
        print_schedule(result, decimal_places);
    }
    Ok(())
}

fn print_summary(record: &AssetRecord, result: &DepreciationResult, dp: u32) {
    println!("Asset type:              {}", record.asset_type_name);
    println!("Acquired:                {}", result.acquisition_date);
    println!("Evaluated at:            {}", result.evaluation_date);
    println!(
        "Useful life:             {} years ({} elapsed, {} remaining, {}-day year)",
        result.useful_life_years,
        result.elapsed_years,
        result.remaining_years(),
        result.year_basis
    );
    println!(
        "Purchase value:          {}",
        bob(result.purchase_value, dp)
    );

    match (result.index_at_acquisition, result.index_at_evaluation) {
        (Some(at_acquisition), Some(at_evaluation)) => {
            println!(
                "UFV acquisition/eval:    {} / {}",
                format_grouped(at_acquisition, INDEX_PLACES),
                format_grouped(at_evaluation, INDEX_PLACES)
            );
            println!(
                "Adjustment factor:       {}",
                format_grouped(result.adjustment_factor, FACTOR_PLACES)
            );
        }
        _ => println!("Adjustment factor:       1 (no re-expression)"),
    }

    println!(
        "Adjusted value:          {}",
        bob(result.adjusted_purchase_value, dp)
    );
    println!(
        "Annual depreciation:     {}",
        bob(result.annual_depreciation, dp)
    );
    println!(
        "Accumulated:             {}",
        bob(result.accumulated_depreciation, dp)
    );
    println!("Book value:              {}", bob(result.book_value, dp));
    if result.is_fully_depreciated() {
        println!("Status:                  fully depreciated");
    }
}

fn print_schedule(result: &DepreciationResult, dp: u32) {
    println!("{:>4}  {:>20}  {:>20}", "Year", "Accumulated", "Book value");
    for point in &result.series {
        let marker = if point.year_offset == result.elapsed_years {
            " <"
        } else {
            ""
        };
        println!(
            "{:>4}  {:>20}  {:>20}{marker}",
            point.year_offset,
            bob(point.accumulated_depreciation, dp),
            bob(point.book_value, dp)
        );
    }
}

pub fn print_batch(entries: &[BatchEntry], decimal_places: u32, as_json: bool) -> Result<()> {
    if as_json {
        let rows: Vec<Value> = entries.iter().map(batch_entry_json).collect();
        return print_json(&rows);
    }

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "[{}] {} | {} | {}",
            entry.slot,
            entry.record.asset_type_name,
            bob(entry.record.purchase_value, decimal_places),
            entry.record.acquisition_date
        );
        match &entry.outcome {
            BatchOutcome::Computed(result) => {
                println!(
                    "    factor {}  adjusted {}  accumulated {}  book {}",
                    format_grouped(result.adjustment_factor, FACTOR_PLACES),
                    bob(result.adjusted_purchase_value, decimal_places),
                    bob(result.accumulated_depreciation, decimal_places),
                    bob(result.book_value, decimal_places)
                );
            }
            BatchOutcome::Skipped => println!("    skipped: purchase value is zero"),
            BatchOutcome::Failed(err) => println!("    failed: {err}"),
        }
    }

    println!();
    match total_book_value(entries) {
        Some(total) => println!("Total book value: {}", bob(total, decimal_places)),
        None => println!("Total book value: out of range"),
    }
    Ok(())
}

/// Sum of the computed book values; `None` if it leaves the decimal range.
fn total_book_value(entries: &[BatchEntry]) -> Option<Decimal> {
    entries
        .iter()
        .filter_map(BatchEntry::result)
        .try_fold(Decimal::ZERO, |total, result| {
            total.checked_add(result.book_value)
        })
}

fn batch_entry_json(entry: &BatchEntry) -> Value {
    let (status, result, error) = match &entry.outcome {
        BatchOutcome::Computed(result) => ("computed", json!(result), Value::Null),
        BatchOutcome::Skipped => ("skipped", Value::Null, Value::Null),
        BatchOutcome::Failed(err) => ("failed", Value::Null, json!(err.to_string())),
    };
    json!({
        "slot": entry.slot,
        "record": entry.record,
        "status": status,
        "result": result,
        "error": error,
    })
}

pub fn print_projection(
    record: &AssetRecord,
    result: &DepreciationResult,
    projection: &Projection,
    decimal_places: u32,
    as_json: bool,
) -> Result<()> {
    if as_json {
        return print_json(&json!({
            "asset_type": record.asset_type_name,
            "useful_life_years": result.useful_life_years,
            "adjusted_purchase_value": result.adjusted_purchase_value,
            "offset_years": projection.offset,
            "book_value": projection.exact,
            "trend_book_value": projection.fitted,
        }));
    }

    println!("Asset type:        {}", record.asset_type_name);
    println!(
        "Adjusted value:    {}",
        bob(result.adjusted_purchase_value, decimal_places)
    );
    println!(
        "Offset:            {} years of {}",
        format_grouped(projection.offset, FACTOR_PLACES),
        result.useful_life_years
    );
    println!(
        "Book value:        {}",
        bob(projection.exact, decimal_places)
    );
    match projection.fitted {
        Some(fitted) => println!("Trend estimate:    {}", bob(fitted, decimal_places)),
        None => println!("Trend estimate:    unavailable"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use deprecia_core::depreciation::{DepreciationEngine, DepreciationOptions};
    use deprecia_shared::types::YearBasis;
    use rust_decimal_macros::dec;

    fn computed(slot: usize, value: Decimal) -> BatchEntry {
        let acquired = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let result = DepreciationEngine::compute(
            value,
            5,
            acquired,
            NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            None,
            DepreciationOptions::historical(YearBasis::Days365),
        )
        .unwrap();
        BatchEntry {
            slot,
            record: AssetRecord::new("Vehiculos automotores", value, acquired),
            outcome: BatchOutcome::Computed(Box::new(result)),
        }
    }

    #[test]
    fn test_total_book_value_ignores_skipped() {
        let skipped = BatchEntry {
            slot: 3,
            record: AssetRecord::new(
                "Edificaciones",
                Decimal::ZERO,
                NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            ),
            outcome: BatchOutcome::Skipped,
        };
        let entries = [computed(1, dec!(10000)), computed(2, dec!(5000)), skipped];

        // One of five years elapsed: 8000 + 4000.
        assert_eq!(total_book_value(&entries), Some(dec!(12000)));
    }

    #[test]
    fn test_total_book_value_out_of_range() {
        let entries = [
            computed(1, dec!(50000000000000000000000000000)),
            computed(2, dec!(50000000000000000000000000000)),
        ];
        assert_eq!(total_book_value(&entries), None);
    }
}
