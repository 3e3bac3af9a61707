use actix_web::web;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::service_type::ServiceType;
use crate::domain::subscriber_email::SubscriberEmail;
use crate::domain::subscriber_name::SubscriberName;
use crate::domain::subscriber_phone::SubscriberPhone;

/// Sparse update: only the fields present in the request body are touched,
/// each validated and normalized the same way as on create.
#[derive(Default)]
pub struct SubscriberUpdate {
    pub service: Option<ServiceType>,
    pub name: Option<SubscriberName>,
    pub phone: Option<SubscriberPhone>,
    pub email: Option<SubscriberEmail>,
    pub expiration_date: Option<NaiveDate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberUpdateBody {
    pub service: Option<ServiceType>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub expiration_date: Option<NaiveDate>,
}

impl TryFrom<web::Json<SubscriberUpdateBody>> for SubscriberUpdate {
    type Error = String;

    fn try_from(body: web::Json<SubscriberUpdateBody>) -> Result<Self, Self::Error> {
        let name = body.name.clone().map(SubscriberName::parse).transpose()?;
        let phone = body.phone.clone().map(SubscriberPhone::parse).transpose()?;
        let email = body.email.clone().map(SubscriberEmail::parse).transpose()?;

        Ok(SubscriberUpdate {
            service: body.service,
            name,
            phone,
            email,
            expiration_date: body.expiration_date,
        })
    }
}
