use std::error::Error;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use optional_core::{NoValue, Optional, Pair};
use optional_core::app::env;
use optional_core::app::tracing::AppTracingBuilder;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
struct Profile {
  name: String,
  #[serde(default)]
  nickname: Optional<String>,
  #[serde(default)]
  age: Optional<u32>,
}

#[derive(Debug, Error)]
enum DemoError {
  #[error("Profile has no nickname")]
  NoNickname,
  #[error(transparent)]
  NoValue(#[from] NoValue),
}

fn main() -> Result<(), Box<dyn Error>> {
  env::load_dotenv_into_env();
  let _tracing = AppTracingBuilder::default()
    .with_log_file_path_opt(env::var("DEMO_LOG_FILE"))
    .build();

  debug!("running demo..");
  unzip_pairs();
  filter_and_fall_back();
  mutate_in_place();
  let result = decode_profiles();
  debug!("..done running demo");

  result
}

fn unzip_pairs() {
  let pair = Pair::new(Optional::of(123), Optional::of("gm"));
  let (first, second) = Optional::of(pair).unzip();
  info!(%first, %second, "unzipped present pair");

  let (first, second) = Optional::<Pair<Optional<i32>, Optional<&str>>>::empty().unzip();
  info!(first_is_empty = first.is_empty(), second_is_empty = second.is_empty(), "unzipped empty pair");

  let sum = Optional::of(2).zip_with(Optional::of(3), |x, y| x + y);
  info!(%sum, "zipped with addition");
}

fn filter_and_fall_back() {
  let value = Optional::of(123)
    .filter(|x| *x > 100)
    .filter(|x| x % 2 == 0)
    .or_else(0);
  info!(value, "filtered odd number out");

  let boxed = Optional::of(7).map_nillable(|x| (x > 5).then(|| Box::new(x)));
  info!(%boxed, "mapped into nillable box");

  let either = Optional::of("left").xor(Optional::empty());
  info!(%either, "xor of present and empty");
}

fn mutate_in_place() {
  let mut slot = Optional::of(123);
  let taken = slot.take();
  info!(%slot, %taken, "took value");

  let previous = slot.replace(789);
  info!(%slot, %previous, "replaced value");
}

fn decode_profiles() -> Result<(), Box<dyn Error>> {
  let data = br#"[{"name":"Ada","nickname":"countess","age":36},{"name":"Grace","age":null},null]"#;
  let profiles: Vec<Optional<Profile>> = serde_json::from_slice(data)?;
  for profile in &profiles {
    info!(%profile, "decoded profile");
    let nickname = nickname(profile.clone());
    match nickname {
      Ok(nickname) => info!(%nickname, "profile has a nickname"),
      Err(e) => info!(error = %e, "profile has no nickname"),
    }
  }

  let mut first = profiles.into_iter().next().unwrap_or_default();
  first.as_mut().if_present(|profile| profile.age = profile.age.map(|age| age + 1));
  let encoded = first.to_json()?;
  info!(json = %String::from_utf8_lossy(&encoded), "encoded profile with incremented age");

  let mut restored = Optional::<Profile>::empty();
  restored.set_from_json(&encoded)?;
  info!(equal = (restored == first), "restored profile from JSON");
  Ok(())
}

fn nickname(profile: Optional<Profile>) -> Result<String, DemoError> {
  profile.val()?
    .nickname
    .val_or(Some(DemoError::NoNickname))
}
