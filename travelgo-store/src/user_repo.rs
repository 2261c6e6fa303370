use async_trait::async_trait;
use sqlx::PgPool;
use travelgo_core::repository::UserRepository;
use travelgo_core::User;

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    email: String,
    name: String,
    password: String,
    login_count: i64,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            email: row.email,
            name: row.name,
            password: row.password,
            login_count: row.login_count,
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn upsert(
        &self,
        user: &User,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        // Registration overwrites an existing record with the same email;
        // there is no "already exists" path.
        sqlx::query(
            r#"
            INSERT INTO users (email, name, password, login_count)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO UPDATE
            SET name = EXCLUDED.name,
                password = EXCLUDED.password,
                login_count = EXCLUDED.login_count
            "#,
        )
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password)
        .bind(user.login_count)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(
        &self,
        email: &str,
    ) -> Result<Option<User>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT email, name, password, login_count FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }
}
