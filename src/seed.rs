//! Startup fixture generation.
//!
//! With `GENERATE` on, the store is wiped and refilled with a fixed set of
//! users and `GENERATE_TEST_ROWS` randomly dated projects. Otherwise the
//! schema is only created if it is missing.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Value};
use sqlx::PgPool;

use crate::config::Config;
use crate::db;
use crate::models::{NewProject, NewUser, UserProject};

const REGULAR_USERS: u32 = 10;
const MAX_MEMBERS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeedSummary {
    pub users: usize,
    pub projects: usize,
    pub memberships: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedProject {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub member_ids: Vec<i32>,
}

/// Runs once at startup, before the listener is bound.
pub async fn init(pool: &PgPool, config: &Config) -> Result<Option<SeedSummary>, sqlx::Error> {
    if !config.generate {
        db::schema::create_all(pool).await?;
        return Ok(None);
    }

    let rows = match config.generate_test_rows {
        Some(0) => {
            tracing::info!("GENERATE_TEST_ROWS is 0, skipping test data generation");
            db::schema::create_all(pool).await?;
            return Ok(None);
        }
        Some(rows) => rows,
        None => {
            tracing::warn!(
                "GENERATE_TEST_ROWS is not a non-negative integer, skipping test data generation"
            );
            db::schema::create_all(pool).await?;
            return Ok(None);
        }
    };

    let summary = generate(pool, rows, &mut StdRng::from_os_rng()).await?;
    Ok(Some(summary))
}

/// Drops all data and refills the store. Destructive.
pub async fn generate<R: Rng>(
    pool: &PgPool,
    rows: u32,
    rng: &mut R,
) -> Result<SeedSummary, sqlx::Error> {
    let users = fixture_users();
    let user_ids: Vec<i32> = users.iter().filter_map(|u| u.id).collect();
    let plan = plan_projects(rows, &user_ids, rng);

    tracing::warn!("Dropping all tables to regenerate test data");
    db::schema::drop_all(pool).await?;
    db::schema::create_all(pool).await?;

    let mut tx = pool.begin().await?;

    for user in &users {
        db::users::insert(&mut *tx, user).await?;
    }

    let mut memberships = 0;
    for planned in &plan {
        let project = NewProject {
            id: Some(planned.id),
            name: Some(planned.name.clone()),
            created_at: Some(planned.created_at),
        };
        db::projects::insert(&mut *tx, &project).await?;

        for &user_id in &planned.member_ids {
            let link = UserProject {
                project_id: planned.id,
                user_id,
            };
            db::user_projects::insert(&mut *tx, link).await?;
            memberships += 1;
        }
    }

    db::schema::sync_sequences(&mut tx).await?;
    tx.commit().await?;

    let summary = SeedSummary {
        users: users.len(),
        projects: plan.len(),
        memberships,
    };
    tracing::info!(
        users = summary.users,
        projects = summary.projects,
        memberships = summary.memberships,
        "Initialized the database"
    );
    Ok(summary)
}

/// `user_1`..`user_10` followed by `admin`, ids starting at 1.
pub fn fixture_users() -> Vec<NewUser> {
    (1..=REGULAR_USERS)
        .map(|n| format!("user_{n}"))
        .chain(std::iter::once("admin".to_string()))
        .zip(1i32..)
        .map(|(username, id)| {
            let fields: Map<String, Value> = [
                ("id", Value::from(id)),
                ("email", Value::from(format!("{username}@example.com"))),
                ("username", Value::from(username)),
                ("password", Value::from("password")),
                ("active", Value::from(true)),
            ]
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect();
            NewUser::from_fields(&fields)
        })
        .collect()
}

pub fn plan_projects<R: Rng>(rows: u32, user_ids: &[i32], rng: &mut R) -> Vec<PlannedProject> {
    let (start, end) = date_bounds();

    let rows = i32::try_from(rows).unwrap_or(i32::MAX);

    (1..=rows)
        .map(|id| {
            let count = rng.random_range(0..=MAX_MEMBERS);
            let member_ids = user_ids.choose_multiple(rng, count).copied().collect();
            PlannedProject {
                id,
                name: format!("Project_{id}"),
                created_at: random_date(start, end, rng),
                member_ids,
            }
        })
        .collect()
}

/// Uniform to the second over `[start, end]`.
pub fn random_date<R: Rng>(start: NaiveDateTime, end: NaiveDateTime, rng: &mut R) -> NaiveDateTime {
    let span = (end - start).num_seconds().max(0);
    start + TimeDelta::seconds(rng.random_range(0..=span))
}

fn date_bounds() -> (NaiveDateTime, NaiveDateTime) {
    let at = |year| {
        NaiveDate::from_ymd_opt(year, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 30, 0))
            .expect("valid fixed date")
    };
    (at(2020), at(2021))
}
