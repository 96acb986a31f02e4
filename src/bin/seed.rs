use bcrypt::{hash, DEFAULT_COST};
use chirp::models::{Credential, Tweet, User};
use chirp::store::Stores;
use chrono::{NaiveDate, Utc};
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use std::env;
use std::error::Error;
use std::path::Path;
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    println!("Starting data seeding...");

    let data_dir = env::var("CHIRP_DATA_DIR").unwrap_or_else(|_| ".".to_string());
    let stores = Stores::open(Path::new(&data_dir))?;

    // Configuration
    let num_users = 100;
    let tweets_per_user = 20;

    let users = seed_users(&stores, num_users)?;
    seed_tweets(&stores, &users, tweets_per_user)?;

    println!("Seeding completed!");
    Ok(())
}

fn seed_users(stores: &Stores, count: i32) -> Result<Vec<User>, Box<dyn Error>> {
    println!("Creating {} users...", count);
    let mut users = Vec::new();

    for i in 0..count {
        let user = User {
            user_id: Uuid::new_v4(),
            email: SafeEmail().fake(),
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
            birth_date: NaiveDate::from_ymd_opt(1970 + i % 35, 1 + (i % 12) as u32, 1 + (i % 28) as u32),
        };
        let password_hash = hash("password123", DEFAULT_COST)?;

        stores.users.append(user.clone())?;
        stores.credentials.append(Credential {
            user_id: user.user_id,
            email: user.email.clone(),
            password_hash,
        })?;

        println!(
            "Created user {}/{}: {} ({})",
            i + 1,
            count,
            user.email,
            user.user_id
        );
        users.push(user);
    }

    Ok(users)
}

fn seed_tweets(stores: &Stores, users: &[User], tweets_per_user: i32) -> Result<(), Box<dyn Error>> {
    println!("Creating {} tweets per user...", tweets_per_user);
    let total_tweets = users.len() as i32 * tweets_per_user;
    let mut current_tweet = 0;

    for user in users {
        for _ in 0..tweets_per_user {
            stores.tweets.append(Tweet {
                tweet_id: Uuid::new_v4(),
                content: Sentence(3..10).fake(),
                by: user.clone(),
                created: Utc::now(),
                updated: None,
            })?;

            current_tweet += 1;
            if current_tweet % 100 == 0 {
                println!("Created {}/{} tweets", current_tweet, total_tweets);
            }
        }
    }

    Ok(())
}
