use actix_web::web;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::service_type::ServiceType;
use crate::domain::subscriber_email::SubscriberEmail;
use crate::domain::subscriber_name::SubscriberName;
use crate::domain::subscriber_phone::SubscriberPhone;

pub struct NewSubscriber {
    pub service: ServiceType,
    pub name: SubscriberName,
    pub phone: SubscriberPhone,
    pub email: SubscriberEmail,
    pub expiration_date: NaiveDate,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscriberBody {
    pub service: ServiceType,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub expiration_date: NaiveDate,
}

impl TryFrom<web::Json<NewSubscriberBody>> for NewSubscriber {
    type Error = String;

    fn try_from(body: web::Json<NewSubscriberBody>) -> Result<Self, Self::Error> {
        let name = SubscriberName::parse(body.name.clone())?;
        let phone = SubscriberPhone::parse(body.phone.clone())?;
        let email = SubscriberEmail::parse(body.email.clone())?;

        Ok(NewSubscriber {
            service: body.service,
            name,
            phone,
            email,
            expiration_date: body.expiration_date,
        })
    }
}
