use actix_web::{delete, get, post, put, web, HttpResponse};
use bcrypt::{hash, DEFAULT_COST};
use chrono::Utc;
use log::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiError;
use crate::models::{CreateTweet, Credential, RegisterUser};
use crate::store::Stores;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(signup)
        .service(login)
        .service(list_users)
        .service(get_user)
        .service(delete_user)
        .service(update_user)
        .service(home)
        .service(post_tweet)
        .service(get_tweet)
        .service(delete_tweet)
        .service(update_tweet);
}

#[post("/signup")]
pub async fn signup(
    stores: web::Data<Stores>,
    body: web::Json<RegisterUser>,
) -> Result<HttpResponse, ApiError> {
    let registration = body.into_inner();
    registration.validate()?;

    let password_hash = hash(registration.password.as_bytes(), DEFAULT_COST)?;
    let profile = stores.users.append(registration.into_profile())?;
    stores.credentials.append(Credential {
        user_id: profile.user_id,
        email: profile.email.clone(),
        password_hash,
    })?;

    info!("registered user {}", profile.user_id);
    Ok(HttpResponse::Created().json(profile))
}

#[post("/login")]
pub async fn login() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotImplemented("login"))
}

#[get("/users")]
pub async fn list_users(stores: web::Data<Stores>) -> Result<HttpResponse, ApiError> {
    let users = stores.users.list()?;
    debug!("listing {} users", users.len());
    Ok(HttpResponse::Ok().json(users))
}

#[get("/users/{user_id}")]
pub async fn get_user(user_id: web::Path<Uuid>) -> Result<HttpResponse, ApiError> {
    debug!("fetch requested for user {}", user_id);
    Err(ApiError::NotImplemented("fetch user"))
}

#[delete("/users/{user_id}/delete")]
pub async fn delete_user(user_id: web::Path<Uuid>) -> Result<HttpResponse, ApiError> {
    debug!("delete requested for user {}", user_id);
    Err(ApiError::NotImplemented("delete user"))
}

#[put("/users/{user_id}/update")]
pub async fn update_user(user_id: web::Path<Uuid>) -> Result<HttpResponse, ApiError> {
    debug!("update requested for user {}", user_id);
    Err(ApiError::NotImplemented("update user"))
}

#[get("/")]
pub async fn home(stores: web::Data<Stores>) -> Result<HttpResponse, ApiError> {
    let tweets = stores.tweets.list()?;
    debug!("listing {} tweets", tweets.len());
    Ok(HttpResponse::Ok().json(tweets))
}

#[post("/post")]
pub async fn post_tweet(
    stores: web::Data<Stores>,
    body: web::Json<CreateTweet>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    request.validate()?;

    let tweet = stores.tweets.append(request.into_tweet(Utc::now()))?;
    info!("posted tweet {}", tweet.tweet_id);
    Ok(HttpResponse::Created().json(tweet))
}

#[get("/tweets/{tweet_id}")]
pub async fn get_tweet(tweet_id: web::Path<Uuid>) -> Result<HttpResponse, ApiError> {
    debug!("fetch requested for tweet {}", tweet_id);
    Err(ApiError::NotImplemented("fetch tweet"))
}

#[delete("/tweets/{tweet_id}/delete")]
pub async fn delete_tweet(tweet_id: web::Path<Uuid>) -> Result<HttpResponse, ApiError> {
    debug!("delete requested for tweet {}", tweet_id);
    Err(ApiError::NotImplemented("delete tweet"))
}

#[put("/tweets/{tweet_id}/update")]
pub async fn update_tweet(tweet_id: web::Path<Uuid>) -> Result<HttpResponse, ApiError> {
    debug!("update requested for tweet {}", tweet_id);
    Err(ApiError::NotImplemented("update tweet"))
}
