use tokio_postgres::{Client, NoTls, Row};

use super::embedded::migrations;
use crate::models::Note;

const NOTE_COLUMNS: &str = "id, title, content, created_at, updated_at";

fn note_from_row(row: &Row) -> Note {
    Note {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

pub struct PgRepository {
    client: Client,
}

impl PgRepository {
    pub async fn new(database_dsn: &str) -> Result<Self, tokio_postgres::Error> {
        let (client, con) = tokio_postgres::connect(database_dsn, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = con.await {
                tracing::error!("connection error: {}", e);
            }
        });

        Ok(Self { client })
    }

    pub async fn migrate(&mut self) -> Result<(), refinery::Error> {
        let migrations_report = migrations::runner().run_async(&mut self.client).await?;

        for migration in migrations_report.applied_migrations() {
            tracing::info!(
                "Migration Applied -  Name: {}, Version: {}",
                migration.name(),
                migration.version()
            );
        }

        tracing::info!("DB migrations finished!");

        Ok(())
    }

    pub async fn create_note(
        &self,
        id: &str,
        title: &str,
        content: &str,
    ) -> Result<Note, tokio_postgres::Error> {
        let row = self
            .client
            .query_one(
                &format!(
                    "INSERT INTO notes (id, title, content) VALUES ($1, $2, $3) RETURNING {NOTE_COLUMNS}"
                ),
                &[&id, &title, &content],
            )
            .await?;

        Ok(note_from_row(&row))
    }

    pub async fn update_note(
        &self,
        id: &str,
        title: &str,
        content: &str,
    ) -> Result<Option<Note>, tokio_postgres::Error> {
        let row = self
            .client
            .query_opt(
                &format!(
                    "UPDATE notes SET title = $1, content = $2, updated_at = now() \
                     WHERE id = $3 RETURNING {NOTE_COLUMNS}"
                ),
                &[&title, &content, &id],
            )
            .await?;

        Ok(row.as_ref().map(note_from_row))
    }

    pub async fn delete_note(&self, id: &str) -> Result<bool, tokio_postgres::Error> {
        let rows = self
            .client
            .execute("DELETE FROM notes WHERE id = $1", &[&id])
            .await?;

        Ok(rows == 1)
    }

    pub async fn get_one_note(&self, id: &str) -> Result<Option<Note>, tokio_postgres::Error> {
        let row = self
            .client
            .query_opt(
                &format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = $1"),
                &[&id],
            )
            .await?;

        Ok(row.as_ref().map(note_from_row))
    }

    pub async fn get_all_notes(&self) -> Result<Vec<Note>, tokio_postgres::Error> {
        let rows = self
            .client
            .query(
                &format!("SELECT {NOTE_COLUMNS} FROM notes ORDER BY created_at, id"),
                &[],
            )
            .await?;

        Ok(rows.iter().map(note_from_row).collect())
    }
}
