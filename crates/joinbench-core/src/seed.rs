use crate::model::{NewPost, ScenarioConfig};
use crate::storage::Store;
use anyhow::{bail, Context};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: &[&str] = &[
    "Ada", "Bram", "Carla", "Daan", "Elena", "Femke", "Gustav", "Hana", "Ivo", "Jolien", "Koen",
    "Lena", "Maarten", "Noor", "Otto", "Petra", "Quinn", "Rosa", "Sven", "Tessa", "Ugo", "Vera",
    "Willem", "Yara",
];

const LAST_NAMES: &[&str] = &[
    "Bakker", "Claes", "Dekker", "Evers", "Fischer", "Groot", "Hendriks", "Imhof", "Jansen",
    "Keller", "Lindgren", "Meyer", "Novak", "Olsen", "Peeters", "Quist", "Romero", "Smit",
    "Tamura", "Urban", "Visser", "Weber", "Ystad", "Zorn",
];

const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea",
];

/// Words per generated post body.
const CONTENT_WORDS: usize = 200;

/// Deterministic fixture generator. Same seed, same rows.
pub struct Seeder {
    rng: StdRng,
}

impl Seeder {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Populates empty tables for one scenario: users first, then posts whose
    /// `author_id` is drawn uniformly from the inserted user ids. A scenario
    /// with posts but no users to author them is refused.
    pub fn populate(&mut self, store: &Store, scenario: &ScenarioConfig) -> anyhow::Result<()> {
        if scenario.num_users == 0 && scenario.num_posts > 0 {
            bail!(
                "cannot seed {} posts without any users to author them",
                scenario.num_posts
            );
        }

        let names: Vec<String> = (0..scenario.num_users).map(|_| self.full_name()).collect();
        let user_ids = store.insert_users(&names).context("seeding users")?;

        let posts: Vec<NewPost> = (0..scenario.num_posts)
            .map(|_| {
                let author_id = user_ids[self.rng.gen_range(0..user_ids.len())];
                NewPost {
                    content: self.post_body(),
                    author_id,
                }
            })
            .collect();
        store.insert_posts(&posts).context("seeding posts")?;

        tracing::debug!(
            event = "scenario_seeded",
            users = scenario.num_users,
            posts = scenario.num_posts
        );
        Ok(())
    }

    fn full_name(&mut self) -> String {
        let first = FIRST_NAMES[self.rng.gen_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[self.rng.gen_range(0..LAST_NAMES.len())];
        format!("{} {}", first, last)
    }

    fn post_body(&mut self) -> String {
        let mut words = Vec::with_capacity(CONTENT_WORDS);
        for _ in 0..CONTENT_WORDS {
            words.push(LOREM[self.rng.gen_range(0..LOREM.len())]);
        }
        words.join(" ")
    }
}
