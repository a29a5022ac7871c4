//! Semantic document writes and the embedding backlog.

use rusqlite::{params, Connection};

use marketfit_core::errors::{EmbeddingError, MarketfitResult};
use marketfit_core::models::SemanticDocument;

use super::vector_search::f32_vec_to_bytes;
use crate::to_storage_err;

/// A stored document that still needs an embedding.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingEmbedding {
    pub id: i64,
    pub country_code: String,
    pub sector: String,
    pub summary: String,
}

/// Insert or update a document keyed by `(country_code, sector)`.
///
/// A document without an embedding keeps any embedding already stored.
pub fn put_semantic(conn: &Connection, doc: &SemanticDocument) -> MarketfitResult<()> {
    let (blob, dims) = match &doc.embedding {
        Some(embedding) if embedding.is_empty() => {
            return Err(EmbeddingError::EmptyEmbedding.into());
        }
        Some(embedding) => (Some(f32_vec_to_bytes(embedding)), Some(embedding.len() as i64)),
        None => (None, None),
    };
    conn.execute(
        "INSERT INTO country_semantics (country_code, sector, summary, embedding, dimensions)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(country_code, sector) DO UPDATE SET
            summary = excluded.summary,
            embedding = COALESCE(excluded.embedding, country_semantics.embedding),
            dimensions = COALESCE(excluded.dimensions, country_semantics.dimensions),
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
        params![doc.country_code, doc.sector, doc.summary, blob, dims],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Store an embedding for an existing document.
pub fn set_embedding(conn: &Connection, id: i64, embedding: &[f32]) -> MarketfitResult<()> {
    if embedding.is_empty() {
        return Err(EmbeddingError::EmptyEmbedding.into());
    }
    let updated = conn
        .execute(
            "UPDATE country_semantics
             SET embedding = ?1, dimensions = ?2,
                 updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             WHERE id = ?3",
            params![f32_vec_to_bytes(embedding), embedding.len() as i64, id],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    if updated == 0 {
        return Err(to_storage_err(format!("no semantic document with id {id}")));
    }
    Ok(())
}

/// Documents with a non-empty summary and no embedding, with `id > after_id`,
/// oldest first.
pub fn pending_embeddings(
    conn: &Connection,
    after_id: i64,
    limit: usize,
) -> MarketfitResult<Vec<PendingEmbedding>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, country_code, sector, summary FROM country_semantics
             WHERE embedding IS NULL AND summary != '' AND id > ?1
             ORDER BY id
             LIMIT ?2",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![after_id, limit as i64], |row| {
            Ok(PendingEmbedding {
                id: row.get(0)?,
                country_code: row.get(1)?,
                sector: row.get(2)?,
                summary: row.get(3)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}
