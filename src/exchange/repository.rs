//! Repository layer for the rate ledger
//!
//! Append-only: rows are inserted and queried, never updated or deleted.
//! No uniqueness constraint exists across rows, many observations per pair
//! are expected over time.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::{PgExecutor, Row};

use super::models::Exchange;
use crate::currency::Currency;

const SELECT_EXCHANGE: &str = r#"
    SELECT e.id, e.rate, e.time,
           cf.id AS from_id, cf.code AS from_code, cf.quantifier AS from_quantifier,
           ct.id AS to_id, ct.code AS to_code, ct.quantifier AS to_quantifier
    FROM exchanges e
    JOIN currencies cf ON cf.id = e.from_id
    JOIN currencies ct ON ct.id = e.to_id
"#;

fn map_exchange(r: PgRow) -> Exchange {
    Exchange {
        id: r.get("id"),
        from: Currency {
            id: r.get("from_id"),
            code: r.get("from_code"),
            quantifier: r.get("from_quantifier"),
        },
        to: Currency {
            id: r.get("to_id"),
            code: r.get("to_code"),
            quantifier: r.get("to_quantifier"),
        },
        rate: r.get("rate"),
        time: r.get("time"),
    }
}

/// Ledger repository for rate observations
pub struct ExchangeRepository;

impl ExchangeRepository {
    /// Most recent observation for a directed pair inside the inclusive
    /// window `[start, end]`.
    pub async fn find_latest<'e>(
        exec: impl PgExecutor<'e>,
        from_code: &str,
        to_code: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Option<Exchange>, sqlx::Error> {
        let sql = format!(
            "{SELECT_EXCHANGE}
             WHERE cf.code = $1 AND ct.code = $2 AND e.time BETWEEN $3 AND $4
             ORDER BY e.time DESC
             LIMIT 1"
        );
        let row = sqlx::query(&sql)
            .bind(from_code)
            .bind(to_code)
            .bind(start)
            .bind(end)
            .fetch_optional(exec)
            .await?;

        Ok(row.map(map_exchange))
    }

    /// Observations ending at `to_code` inside the window, newest first,
    /// bounded to `limit` rows. Triangulation candidate pool.
    pub async fn find_recent_ending_at<'e>(
        exec: impl PgExecutor<'e>,
        to_code: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        limit: i64,
    ) -> Result<Vec<Exchange>, sqlx::Error> {
        let sql = format!(
            "{SELECT_EXCHANGE}
             WHERE ct.code = $1 AND e.time BETWEEN $2 AND $3
             ORDER BY e.time DESC
             LIMIT $4"
        );
        let rows = sqlx::query(&sql)
            .bind(to_code)
            .bind(start)
            .bind(end)
            .bind(limit)
            .fetch_all(exec)
            .await?;

        Ok(rows.into_iter().map(map_exchange).collect())
    }

    /// Append a new observation.
    pub async fn insert<'e>(
        exec: impl PgExecutor<'e>,
        from: &Currency,
        to: &Currency,
        rate: Decimal,
        time: NaiveDateTime,
    ) -> Result<Exchange, sqlx::Error> {
        let row = sqlx::query(
            r#"INSERT INTO exchanges (from_id, to_id, rate, time)
               VALUES ($1, $2, $3, $4)
               RETURNING id"#,
        )
        .bind(from.id)
        .bind(to.id)
        .bind(rate)
        .bind(time)
        .fetch_one(exec)
        .await?;

        Ok(Exchange {
            id: row.get("id"),
            from: from.clone(),
            to: to.clone(),
            rate,
            time,
        })
    }

    /// Count ledger rows for a directed pair. Used by tests to pin the
    /// "no write on miss" property.
    pub async fn count_for_pair<'e>(
        exec: impl PgExecutor<'e>,
        from_code: &str,
        to_code: &str,
    ) -> Result<i64, sqlx::Error> {
        let row = sqlx::query(
            r#"SELECT COUNT(*) AS n
               FROM exchanges e
               JOIN currencies cf ON cf.id = e.from_id
               JOIN currencies ct ON ct.id = e.to_id
               WHERE cf.code = $1 AND ct.code = $2"#,
        )
        .bind(from_code)
        .bind(to_code)
        .fetch_one(exec)
        .await?;

        Ok(row.get("n"))
    }
}
