use super::Engine;

use async_trait::async_trait;

use crate::{
    api::QuoteAPI,
    entities::{BaseAmount, Quote, QuoteRequest},
    error::Error,
    pricing::select_car,
};

#[async_trait]
impl QuoteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn get_all_car_prices(&self, request: QuoteRequest) -> Result<Quote, Error> {
        self.quote(&request.plan, &request.pickup_location, &request.drop_location)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn get_base_amount(
        &self,
        request: QuoteRequest,
        car_type: Option<&str>,
    ) -> Result<BaseAmount, Error> {
        let quote = self
            .quote(&request.plan, &request.pickup_location, &request.drop_location)
            .await?;

        let (car_type, base_amount) = select_car(&quote.fares, car_type)?;

        Ok(BaseAmount {
            car_type,
            base_amount,
            distance: quote.distance,
        })
    }
}
