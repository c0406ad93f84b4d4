use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, types::Json, Executor, Pool, Postgres, Row};

use crate::entities::{Booking, Location, Rates, TripType};
use crate::error::{booking_not_found_error, Error};

#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Returns false when a booking with the same id already exists.
    async fn insert_booking(&self, booking: &Booking) -> Result<bool, Error>;

    async fn find_booking(&self, booking_id: &str) -> Result<Option<Booking>, Error>;

    /// Overwrites the stored booking. Fails with not found for unknown ids.
    async fn update_booking(&self, booking: &Booking) -> Result<(), Error>;
}

#[async_trait]
pub trait RateRepository: Send + Sync {
    /// Rates for the route, with both locations already normalized.
    async fn find_rates(
        &self,
        trip_type: TripType,
        origin: &Location,
        destination: &Location,
    ) -> Result<Option<Rates>, Error>;
}

pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    #[tracing::instrument(name = "PgStore::new", skip(db_uri))]
    pub async fn new(db_uri: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(db_uri)
            .await?;

        pool.execute("CREATE TABLE IF NOT EXISTS bookings (booking_id VARCHAR PRIMARY KEY, status VARCHAR NOT NULL, data JSONB NOT NULL, updated_at TIMESTAMPTZ NOT NULL DEFAULT now())")
            .await?;

        for trip_type in [TripType::OneWay, TripType::RoundTrip, TripType::Rental] {
            let query = format!(
                "CREATE TABLE IF NOT EXISTS {} (id SERIAL PRIMARY KEY, source_city VARCHAR NOT NULL, source_state VARCHAR NOT NULL, destination_city VARCHAR NOT NULL, destination_state VARCHAR NOT NULL, hatchback DOUBLE PRECISION, sedan DOUBLE PRECISION, suv DOUBLE PRECISION, suvplus DOUBLE PRECISION)",
                trip_type.rate_table()
            );
            pool.execute(query.as_str()).await?;
        }

        Ok(Self { pool })
    }
}

#[async_trait]
impl BookingStore for PgStore {
    #[tracing::instrument(skip(self, booking), fields(booking_id = %booking.booking_id))]
    async fn insert_booking(&self, booking: &Booking) -> Result<bool, Error> {
        let mut conn = self.pool.acquire().await?;

        let result = conn
            .execute(
                sqlx::query("INSERT INTO bookings (booking_id, status, data) VALUES ($1, $2, $3) ON CONFLICT (booking_id) DO NOTHING")
                    .bind(&booking.booking_id)
                    .bind(booking.status.name())
                    .bind(Json(booking)),
            )
            .await?;

        Ok(result.rows_affected() == 1)
    }

    #[tracing::instrument(skip(self))]
    async fn find_booking(&self, booking_id: &str) -> Result<Option<Booking>, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(
                sqlx::query("SELECT data FROM bookings WHERE booking_id = $1").bind(booking_id),
            )
            .await?;

        match maybe_result {
            Some(result) => {
                let Json(booking): Json<Booking> = result.try_get("data")?;
                Ok(Some(booking))
            }
            None => Ok(None),
        }
    }

    #[tracing::instrument(skip(self, booking), fields(booking_id = %booking.booking_id))]
    async fn update_booking(&self, booking: &Booking) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        let result = conn
            .execute(
                sqlx::query("UPDATE bookings SET status = $2, data = $3, updated_at = now() WHERE booking_id = $1")
                    .bind(&booking.booking_id)
                    .bind(booking.status.name())
                    .bind(Json(booking)),
            )
            .await?;

        if result.rows_affected() == 0 {
            return Err(booking_not_found_error());
        }

        Ok(())
    }
}

#[async_trait]
impl RateRepository for PgStore {
    #[tracing::instrument(skip(self))]
    async fn find_rates(
        &self,
        trip_type: TripType,
        origin: &Location,
        destination: &Location,
    ) -> Result<Option<Rates>, Error> {
        let query = format!(
            "SELECT hatchback, sedan, suv, suvplus FROM {} WHERE LOWER(source_city) = $1 AND LOWER(source_state) = $2 AND LOWER(destination_city) = $3 AND LOWER(destination_state) = $4 ORDER BY id LIMIT 1",
            trip_type.rate_table()
        );

        let mut conn = self.pool.acquire().await?;

        let rates = sqlx::query_as::<_, Rates>(&query)
            .bind(&origin.city)
            .bind(&origin.state)
            .bind(&destination.city)
            .bind(&destination.state)
            .fetch_optional(&mut conn)
            .await?;

        Ok(rates)
    }
}
