/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use migration::Migrator;
use sea_orm::{
    ColumnTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, QueryFilter,
};
use sea_orm_migration::prelude::*;
use std::time::Duration;
use uuid::Uuid;

use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file).context("Failed to read database url from file")?
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    opt.sqlx_logging(cli.log_level == "debug")
        .max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;

    Ok(db)
}

/// Loads a quiz's questions together with their answer sets, grouped per
/// question.
pub async fn get_questions_with_answers(
    db: &DatabaseConnection,
    quiz_id: Uuid,
) -> Result<Vec<(MQuestion, Vec<MAnswer>)>> {
    let questions = EQuestion::find()
        .filter(CQuestion::QuizId.eq(quiz_id))
        .all(db)
        .await
        .context("Failed to query questions")?;

    let question_ids: Vec<Uuid> = questions.iter().map(|q| q.id).collect();

    let answers = EAnswer::find()
        .filter(CAnswer::QuestionId.is_in(question_ids))
        .all(db)
        .await
        .context("Failed to query answers")?;

    let mut grouped = Vec::new();
    for question in questions {
        let own = answers
            .iter()
            .filter(|a| a.question_id == question.id)
            .cloned()
            .collect();
        grouped.push((question, own));
    }

    Ok(grouped)
}

/// Resolves the kursus a quiz belongs to via its parent topic.
pub async fn get_kursus_of_quiz(
    db: &DatabaseConnection,
    quiz: &MQuiz,
) -> Result<Option<MKursus>> {
    let topic = ETopic::find_by_id(quiz.topic_id)
        .one(db)
        .await
        .context("Failed to query topic")?;

    match topic {
        Some(t) => Ok(EKursus::find_by_id(t.kursus_id)
            .one(db)
            .await
            .context("Failed to query kursus")?),
        None => Ok(None),
    }
}
