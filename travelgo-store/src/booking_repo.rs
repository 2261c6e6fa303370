use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use travelgo_core::repository::BookingRepository;
use travelgo_core::{Booking, Money};

pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    email: String,
    booking_id: String,
    transport_id: String,
    seat: String,
    price_minor: i64,
    date: NaiveDate,
    payment_method: String,
    payment_reference: String,
    details: String,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            email: row.email,
            booking_id: row.booking_id,
            transport_id: row.transport_id,
            seat: row.seat,
            price: Money::from_minor(row.price_minor),
            date: row.date,
            payment_method: row.payment_method,
            payment_reference: row.payment_reference,
            details: row.details,
        }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn put(
        &self,
        booking: &Booking,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query(
            r#"
            INSERT INTO bookings
                (email, booking_id, transport_id, seat, price_minor, date,
                 payment_method, payment_reference, details)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(&booking.email)
        .bind(&booking.booking_id)
        .bind(&booking.transport_id)
        .bind(&booking.seat)
        .bind(booking.price.as_minor())
        .bind(booking.date)
        .bind(&booking.payment_method)
        .bind(&booking.payment_reference)
        .bind(&booking.details)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(
        &self,
        email: &str,
        booking_id: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        // The caller's email is the partition key, so deletion is naturally
        // scoped to the caller's own records. Zero rows affected is fine.
        sqlx::query("DELETE FROM bookings WHERE email = $1 AND booking_id = $2")
            .bind(email)
            .bind(booking_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list_for_user(
        &self,
        email: &str,
    ) -> Result<Vec<Booking>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT email, booking_id, transport_id, seat, price_minor, date,
                   payment_method, payment_reference, details
            FROM bookings
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }
}
