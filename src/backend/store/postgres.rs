//! PostgreSQL implementation of `ContentStore`
//!
//! Plain `sqlx` queries against the schema in `migrations/`. Rows are mapped
//! by hand where a domain type is not a straight column copy (tagged targets,
//! emojis, author joins).

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgConnection, PgPool, Row};
use std::collections::HashSet;
use uuid::Uuid;

use crate::backend::store::{CommentFilter, ContentStore, StoreError};
use crate::shared::content::{
    Article, Authored, Comment, CommentTarget, Emoji, Flashcard, NewComment, NewReaction,
    Reaction, ReactionTarget, ReactionView,
};
use crate::shared::space::{Alert, AlertKind, NewAlert, Space};
use crate::shared::user::{UserProfile, UserSummary};

const COMMENT_COLUMNS: &str = "c.id, c.text, c.level, c.author_id, c.parent_id, \
     c.article_id, c.flashcard_id, c.created_at";

const REACTION_COLUMNS: &str = "r.id, r.emoji, r.user_id, r.article_id, r.flashcard_id, \
     r.comment_id, r.alert_id, r.created_at";

/// `ContentStore` backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn comment_from_row(row: &PgRow) -> Result<Comment, StoreError> {
    let id: Uuid = row.try_get("id")?;
    let target = CommentTarget::from_ids(row.try_get("article_id")?, row.try_get("flashcard_id")?)
        .map_err(|e| StoreError::InvalidRow(format!("comment {}: {}", id, e)))?
        .ok_or_else(|| StoreError::InvalidRow(format!("comment {} has no content", id)))?;

    Ok(Comment {
        id,
        text: row.try_get("text")?,
        level: row.try_get("level")?,
        author_id: row.try_get("author_id")?,
        parent_id: row.try_get("parent_id")?,
        target,
        created_at: row.try_get("created_at")?,
    })
}

fn reaction_from_row(row: &PgRow) -> Result<Reaction, StoreError> {
    let id: Uuid = row.try_get("id")?;
    let emoji: String = row.try_get("emoji")?;
    let emoji = emoji
        .parse::<Emoji>()
        .map_err(|e| StoreError::InvalidRow(format!("reaction {}: {}", id, e)))?;
    let target = ReactionTarget::from_ids(
        row.try_get("article_id")?,
        row.try_get("flashcard_id")?,
        row.try_get("comment_id")?,
        row.try_get("alert_id")?,
    )
    .map_err(|e| StoreError::InvalidRow(format!("reaction {}: {}", id, e)))?;

    Ok(Reaction {
        id,
        emoji,
        user_id: row.try_get("user_id")?,
        target,
        created_at: row.try_get("created_at")?,
    })
}

fn alert_from_row(row: &PgRow) -> Result<Alert, StoreError> {
    let id: Uuid = row.try_get("id")?;
    let kind: String = row.try_get("kind")?;
    let kind = AlertKind::from_name(&kind)
        .ok_or_else(|| StoreError::InvalidRow(format!("alert {} has kind '{}'", id, kind)))?;

    Ok(Alert {
        id,
        kind,
        message: row.try_get("message")?,
        user_id: row.try_get("user_id")?,
        space_id: row.try_get("space_id")?,
        is_read: row.try_get("is_read")?,
        created_at: row.try_get("created_at")?,
    })
}

/// Author summary of a row joined against `users` as `username`
fn author_from_row(row: &PgRow, author_id: Uuid) -> Result<UserSummary, StoreError> {
    Ok(UserSummary {
        id: author_id,
        username: row.try_get("username")?,
    })
}

/// Foreign-key columns of a reaction in schema order
fn reaction_target_columns(target: ReactionTarget) -> [Option<Uuid>; 4] {
    match target {
        ReactionTarget::Article(id) => [Some(id), None, None, None],
        ReactionTarget::Flashcard(id) => [None, Some(id), None, None],
        ReactionTarget::Comment(id) => [None, None, Some(id), None],
        ReactionTarget::Alert(id) => [None, None, None, Some(id)],
    }
}

fn target_table(target: ReactionTarget) -> &'static str {
    match target {
        ReactionTarget::Article(_) => "articles",
        ReactionTarget::Flashcard(_) => "flashcards",
        ReactionTarget::Comment(_) => "comments",
        ReactionTarget::Alert(_) => "alerts",
    }
}

#[async_trait]
impl ContentStore for PgStore {
    async fn find_user(&self, id: Uuid) -> Result<Option<UserProfile>, StoreError> {
        let user = sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT id, username, email, is_admin, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_comment(&self, id: Uuid) -> Result<Option<Comment>, StoreError> {
        let sql = format!("SELECT {} FROM comments c WHERE c.id = $1", COMMENT_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(comment_from_row).transpose()
    }

    async fn find_comments(
        &self,
        filter: CommentFilter,
    ) -> Result<Vec<Authored<Comment>>, StoreError> {
        let (condition, key) = match filter {
            CommentFilter::TopLevel(CommentTarget::Article(id)) => {
                ("c.parent_id IS NULL AND c.article_id = $1", id)
            }
            CommentFilter::TopLevel(CommentTarget::Flashcard(id)) => {
                ("c.parent_id IS NULL AND c.flashcard_id = $1", id)
            }
            CommentFilter::RepliesTo(parent_id) => ("c.parent_id = $1", parent_id),
        };

        let sql = format!(
            r#"
            SELECT {}, u.username
            FROM comments c
            JOIN users u ON u.id = c.author_id
            WHERE {}
            ORDER BY c.created_at, c.seq
            "#,
            COMMENT_COLUMNS, condition
        );

        let rows = sqlx::query(&sql).bind(key).fetch_all(&self.pool).await?;

        rows.iter()
            .map(|row| -> Result<_, StoreError> {
                let comment = comment_from_row(row)?;
                let author = author_from_row(row, comment.author_id)?;
                Ok(Authored::new(comment, author))
            })
            .collect()
    }

    async fn create_comment(&self, comment: NewComment) -> Result<Comment, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO comments (id, text, level, author_id, parent_id, article_id, flashcard_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(id)
        .bind(&comment.text)
        .bind(comment.level)
        .bind(comment.author_id)
        .bind(comment.parent_id)
        .bind(comment.target.article_id())
        .bind(comment.target.flashcard_id())
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Comment {
            id,
            text: comment.text,
            level: comment.level,
            author_id: comment.author_id,
            parent_id: comment.parent_id,
            target: comment.target,
            created_at: now,
        })
    }

    async fn find_reactions(
        &self,
        target: ReactionTarget,
    ) -> Result<Vec<ReactionView>, StoreError> {
        let sql = format!(
            r#"
            SELECT {}, u.username
            FROM reactions r
            JOIN users u ON u.id = r.user_id
            WHERE r.{}_id = $1
            ORDER BY r.created_at, r.seq
            "#,
            REACTION_COLUMNS,
            target.kind_str()
        );

        let rows = sqlx::query(&sql)
            .bind(target.id())
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| -> Result<_, StoreError> {
                let reaction = reaction_from_row(row)?;
                let user = author_from_row(row, reaction.user_id)?;
                Ok(ReactionView { reaction, user })
            })
            .collect()
    }

    async fn find_reaction(
        &self,
        user_id: Uuid,
        target: ReactionTarget,
    ) -> Result<Option<Reaction>, StoreError> {
        let sql = format!(
            "SELECT {} FROM reactions r WHERE r.user_id = $1 AND r.{}_id = $2",
            REACTION_COLUMNS,
            target.kind_str()
        );

        let row = sqlx::query(&sql)
            .bind(user_id)
            .bind(target.id())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(reaction_from_row).transpose()
    }

    async fn create_reaction(&self, reaction: NewReaction) -> Result<Reaction, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let [article_id, flashcard_id, comment_id, alert_id] =
            reaction_target_columns(reaction.target);

        sqlx::query(
            r#"
            INSERT INTO reactions (id, emoji, user_id, article_id, flashcard_id, comment_id, alert_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(id)
        .bind(reaction.emoji.as_str())
        .bind(reaction.user_id)
        .bind(article_id)
        .bind(flashcard_id)
        .bind(comment_id)
        .bind(alert_id)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Reaction {
            id,
            emoji: reaction.emoji,
            user_id: reaction.user_id,
            target: reaction.target,
            created_at: now,
        })
    }

    async fn target_exists(&self, target: ReactionTarget) -> Result<bool, StoreError> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)",
            target_table(target)
        );

        let exists: bool = sqlx::query_scalar(&sql)
            .bind(target.id())
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn find_space(&self, id: Uuid) -> Result<Option<Space>, StoreError> {
        let space = sqlx::query_as::<_, Space>(
            r#"
            SELECT id, name, description, banner_url, level, parent_id, created_at
            FROM spaces
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(space)
    }

    async fn list_spaces(&self) -> Result<Vec<Space>, StoreError> {
        let spaces = sqlx::query_as::<_, Space>(
            r#"
            SELECT id, name, description, banner_url, level, parent_id, created_at
            FROM spaces
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(spaces)
    }

    async fn list_subscribed_spaces(&self, user_id: Uuid) -> Result<Vec<Space>, StoreError> {
        let spaces = sqlx::query_as::<_, Space>(
            r#"
            SELECT s.id, s.name, s.description, s.banner_url, s.level, s.parent_id, s.created_at
            FROM spaces s
            JOIN space_subscriptions ss ON ss.space_id = s.id
            WHERE ss.user_id = $1
            ORDER BY s.created_at, s.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(spaces)
    }

    async fn space_subscribers(&self, space_id: Uuid) -> Result<Vec<UserSummary>, StoreError> {
        let users = sqlx::query_as::<_, UserSummary>(
            r#"
            SELECT u.id, u.username
            FROM users u
            JOIN space_subscriptions ss ON ss.user_id = u.id
            WHERE ss.space_id = $1
            ORDER BY ss.created_at, u.id
            "#,
        )
        .bind(space_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn space_contributors(&self, space_id: Uuid) -> Result<Vec<UserSummary>, StoreError> {
        let users = sqlx::query_as::<_, UserSummary>(
            r#"
            SELECT u.id, u.username
            FROM users u
            JOIN space_contributions sc ON sc.user_id = u.id
            WHERE sc.space_id = $1
            ORDER BY sc.created_at, u.id
            "#,
        )
        .bind(space_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn articles_in_space(
        &self,
        space_id: Uuid,
    ) -> Result<Vec<Authored<Article>>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT a.id, a.title, a.text, a.author_id, a.space_id, a.created_at, u.username
            FROM articles a
            JOIN users u ON u.id = a.author_id
            WHERE a.space_id = $1
            ORDER BY a.created_at, a.id
            "#,
        )
        .bind(space_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> Result<_, StoreError> {
                let article = Article::from_row(row)?;
                let author = author_from_row(row, article.author_id)?;
                Ok(Authored::new(article, author))
            })
            .collect()
    }

    async fn flashcards_in_space(
        &self,
        space_id: Uuid,
    ) -> Result<Vec<Authored<Flashcard>>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT f.id, f.title, f.short_description, f.long_description,
                   f.author_id, f.space_id, f.created_at, u.username
            FROM flashcards f
            JOIN users u ON u.id = f.author_id
            WHERE f.space_id = $1
            ORDER BY f.created_at, f.id
            "#,
        )
        .bind(space_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> Result<_, StoreError> {
                let flashcard = Flashcard::from_row(row)?;
                let author = author_from_row(row, flashcard.author_id)?;
                Ok(Authored::new(flashcard, author))
            })
            .collect()
    }

    async fn find_subscription_ids(&self, user_id: Uuid) -> Result<HashSet<Uuid>, StoreError> {
        let ids: Vec<Uuid> =
            sqlx::query_scalar("SELECT space_id FROM space_subscriptions WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(ids.into_iter().collect())
    }

    async fn create_subscription(
        &self,
        user_id: Uuid,
        space_id: Uuid,
        alert: NewAlert,
    ) -> Result<Alert, StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO space_subscriptions (user_id, space_id, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(user_id)
        .bind(space_id)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        let created = insert_alert(&mut *tx, alert).await?;
        tx.commit().await?;

        Ok(created)
    }

    async fn delete_subscription(
        &self,
        user_id: Uuid,
        space_id: Uuid,
    ) -> Result<bool, StoreError> {
        let result =
            sqlx::query("DELETE FROM space_subscriptions WHERE user_id = $1 AND space_id = $2")
                .bind(user_id)
                .bind(space_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn unread_alerts(
        &self,
        user_id: Uuid,
        space_id: Uuid,
    ) -> Result<Vec<Alert>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, kind, message, user_id, space_id, is_read, created_at
            FROM alerts
            WHERE user_id = $1 AND space_id = $2 AND is_read = FALSE
            ORDER BY created_at, id
            "#,
        )
        .bind(user_id)
        .bind(space_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(alert_from_row).collect()
    }
}

/// Insert an alert on an open transaction
async fn insert_alert(conn: &mut PgConnection, alert: NewAlert) -> Result<Alert, StoreError> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO alerts (id, kind, message, user_id, space_id, is_read, created_at)
        VALUES ($1, $2, $3, $4, $5, FALSE, $6)
        "#,
    )
    .bind(id)
    .bind(alert.kind.as_str())
    .bind(&alert.message)
    .bind(alert.user_id)
    .bind(alert.space_id)
    .bind(now)
    .execute(conn)
    .await?;

    Ok(Alert {
        id,
        kind: alert.kind,
        message: alert.message,
        user_id: alert.user_id,
        space_id: alert.space_id,
        is_read: false,
        created_at: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaction_target_columns_single_slot() {
        let id = Uuid::new_v4();
        assert_eq!(
            reaction_target_columns(ReactionTarget::Comment(id)),
            [None, None, Some(id), None]
        );
        assert_eq!(
            reaction_target_columns(ReactionTarget::Alert(id)),
            [None, None, None, Some(id)]
        );
    }

    #[test]
    fn test_target_table_names() {
        let id = Uuid::new_v4();
        assert_eq!(target_table(ReactionTarget::Article(id)), "articles");
        assert_eq!(target_table(ReactionTarget::Flashcard(id)), "flashcards");
    }
}
