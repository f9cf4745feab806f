use actix_cors::Cors;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use log::{error, info, warn};
use serde::Deserialize;

use syl_gen_core::model::request::DEFAULT_SYLLABLES;
use syl_gen_core::{Category, Gender, GenerationRequest, Generator, SuffixOptions};

use config::{AppConfig, Limits};

mod config;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize, Default)]
struct GenerateParams {
	category: Option<String>,
	syllables: Option<String>, // comma separated, one per word: "2,3"
	words: Option<usize>,
	count: Option<usize>,
	hyphenated: Option<bool>,
	demonym: Option<bool>,
	natural: Option<bool>,
	artificial: Option<bool>,
	generic: Option<bool>,
	continent: Option<bool>,
	prepositions: Option<bool>,
	gender: Option<String>,
}

struct SharedData {
	generator: Generator,
	limits: Limits,
}

impl GenerateParams {
	/// Parses the syllable list, clamping every target to `1..=max`.
	fn syllables(&self, max: u32) -> Result<Vec<u32>, String> {
		let raw = match &self.syllables {
			None => return Ok(vec![DEFAULT_SYLLABLES.min(max.max(1))]),
			Some(s) if s.trim().is_empty() => return Err("Syllables cannot be empty".into()),
			Some(s) => s,
		};
		raw.split(',')
			.map(|part| match part.trim().parse::<u32>() {
				Ok(n) => Ok(n.clamp(1, max.max(1))),
				Err(_) => Err(format!("Invalid syllable count '{}'", part.trim())),
			})
			.collect()
	}

	/// Builds a generation request and the number of names to produce.
	///
	/// Out-of-range numbers are clamped to `limits`, unknown names are errors.
	fn to_request(&self, limits: &Limits) -> Result<(GenerationRequest, usize), String> {
		let category = match &self.category {
			Some(s) => s.parse::<Category>()?,
			None => Category::default(),
		};
		let gender = match &self.gender {
			Some(s) => s.parse::<Gender>()?,
			None => Gender::default(),
		};

		let defaults = SuffixOptions::default();
		let options = SuffixOptions {
			include_natural: self.natural.unwrap_or(defaults.include_natural),
			include_artificial: self.artificial.unwrap_or(defaults.include_artificial),
			include_generic: self.generic.unwrap_or(defaults.include_generic),
			include_continent: self.continent.unwrap_or(defaults.include_continent),
			include_prepositions: self.prepositions.unwrap_or(defaults.include_prepositions),
			gender,
		};

		let request = GenerationRequest {
			category,
			syllables: self.syllables(limits.max_syllables)?,
			word_count: self.words.unwrap_or(1).clamp(1, limits.max_words.max(1)),
			hyphenated: self.hyphenated.unwrap_or(false),
			demonym: self.demonym.unwrap_or(false),
			options,
		};
		let count = self.count.unwrap_or(1).clamp(1, limits.max_count.max(1));

		Ok((request, count))
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates a batch of names from the query parameters.
/// Returns one name per line.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<SharedData>, query: web::Query<GenerateParams>) -> impl Responder {
	let (request, count) = match query.to_request(&data.limits) {
		Ok(r) => r,
		Err(e) => {
			warn!("Rejected generate request: {}", e);
			return HttpResponse::BadRequest().body(e);
		}
	};

	HttpResponse::Ok().body(data.generator.generate_batch(&request, count).join("\n"))
}

#[get("/v1/categories")]
async fn get_categories() -> impl Responder {
	let names: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
	HttpResponse::Ok().body(names.join("\n"))
}

#[get("/v1/prepositions")]
async fn get_prepositions(data: web::Data<SharedData>) -> impl Responder {
	HttpResponse::Ok().body(data.generator.tables().prepositions().join("\n"))
}

/// Main entry point for the server.
///
/// Loads the configuration and the fragment tables, then starts an Actix-web
/// HTTP server. The generator is read-only, so workers share it without a lock.
///
/// # Notes
/// - The server binds to `server.host:server.port` (127.0.0.1:5000 by default).
/// - Broken fragment tables abort startup.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = AppConfig::load();
	let generator = match &config.fragments.file {
		Some(path) => {
			info!("Loading fragments from {}", path.display());
			Generator::from_file(path)
		}
		None => Generator::new(),
	};
	let generator = match generator {
		Ok(g) => g,
		Err(e) => {
			error!("Failed to build fragment tables: {}", e);
			return Err(std::io::Error::other(e));
		}
	};

	let shared_data = web::Data::new(SharedData {
		generator,
		limits: config.limits.clone(),
	});

	info!("Listening on {}:{}", config.server.host, config.server.port);
	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_data.clone())
			.service(get_generated)
			.service(get_categories)
			.service(get_prepositions)
	})
		.bind((config.server.host.clone(), config.server.port))?
		.run()
		.await
}
