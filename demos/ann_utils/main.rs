//! ANN container utility.
//!
//! Provides three subcommands:
//! - `inspect`: print the header, events and image descriptors of one file
//! - `roundtrip`: parse, dump and re-parse a file and report differences
//! - `validate`: scan a directory and strictly parse every `.ANN` file
//!
//! # Usage
//!
//! ```bash
//! cargo run --example ann_utils inspect KRABIK.ann
//! cargo run --example ann_utils inspect KRABIK.ann --json
//! cargo run --example ann_utils roundtrip KRABIK.ann -o KRABIK_saved.ann
//! cargo run --example ann_utils validate -d bin/ann --recursive
//! ```

use std::{
	fs,
	path::{Path, PathBuf},
};

use ann_rs::prelude::file::ann::{Ann, AnnCodec, DumpPolicy, MagicSet, ParseConfig};
use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use walkdir::WalkDir;

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Inspect(opts) => run_inspect(opts),
		Command::Roundtrip(opts) => run_roundtrip(opts),
		Command::Validate(opts) => run_validate(opts),
	}
}

#[derive(Parser)]
#[command(name = "ann_utils")]
#[command(author = "ann-rs project")]
#[command(version)]
#[command(about = "Inspect, round-trip and validate animation (.ANN) containers", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Print the structure of a single .ANN file
	Inspect(InspectArgs),
	/// Parse, dump and re-parse a single .ANN file
	Roundtrip(RoundtripArgs),
	/// Strictly parse every .ANN file under a directory
	Validate(ValidateArgs),
}

#[derive(Args)]
struct MagicArgs {
	/// Additional accepted signature, as hex (e.g. 0150564E)
	#[arg(long = "accept-magic", value_name = "HEX", value_parser = parse_magic)]
	accept_magic: Vec<u32>,
}

impl MagicArgs {
	fn parse_config(&self, strict: bool) -> ParseConfig {
		let magics = self.accept_magic.iter().fold(MagicSet::default(), |set, &magic| set.with(magic));
		let accepted: Vec<String> =
			magics.as_slice().iter().map(|magic| format!("0x{magic:08X}")).collect();
		log::debug!("Accepted signatures: {}", accepted.join(", "));

		let config = if strict {
			ParseConfig::strict()
		} else {
			ParseConfig::lenient()
		};
		config.with_magics(magics)
	}
}

#[derive(Args)]
struct InspectArgs {
	/// Path to a single .ANN file
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Print a JSON summary instead of text
	#[arg(long, default_value_t = false)]
	json: bool,

	/// Also list every frame of every event
	#[arg(short, long, default_value_t = false)]
	verbose: bool,

	#[command(flatten)]
	magic: MagicArgs,
}

#[derive(Args)]
struct RoundtripArgs {
	/// Path to a single .ANN file
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Write the dumped container to this path
	#[arg(short, long, value_name = "OUTPUT")]
	output: Option<PathBuf>,

	/// Keep signature, compression and loop points as loaded
	#[arg(long, default_value_t = false)]
	preserve: bool,

	#[command(flatten)]
	magic: MagicArgs,
}

#[derive(Args)]
struct ValidateArgs {
	/// Directory containing .ANN files
	#[arg(short = 'd', long, value_name = "DIR", default_value = "bin/ann")]
	root: PathBuf,

	/// Recurse into sub-directories while scanning
	#[arg(short, long, default_value_t = false)]
	recursive: bool,

	/// Also check that each file survives a normalizing dump
	#[arg(long, default_value_t = false)]
	roundtrip: bool,

	#[command(flatten)]
	magic: MagicArgs,
}

fn parse_magic(text: &str) -> Result<u32, String> {
	let digits = text.trim_start_matches("0x").trim_start_matches("0X");
	u32::from_str_radix(digits, 16).map_err(|err| format!("invalid signature {text:?}: {err}"))
}

fn load(path: &Path, codec: &AnnCodec) -> Result<(Vec<u8>, Ann)> {
	let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
	let ann = codec.parse(&bytes).with_context(|| format!("Failed to parse {}", path.display()))?;
	Ok((bytes, ann))
}

fn run_inspect(args: InspectArgs) -> Result<()> {
	let codec = AnnCodec::new().with_parse_config(args.magic.parse_config(false));
	let (bytes, ann) = load(&args.file, &codec)?;

	if args.json {
		println!("{}", serde_json::to_string_pretty(&summary_json(&ann))?);
		return Ok(());
	}

	println!("File: {} (size: {} bytes)", args.file.display(), bytes.len());
	println!("{}", ann.header);

	println!("\nEvents ({}):", ann.events.len());
	for (index, event) in ann.events.iter().enumerate() {
		println!(
			"  [{index:3}] {:<32} frames {:3} loop {:3} transparency {:3}",
			event.name, event.frames_count, event.loop_after_frame, event.transparency
		);
		if !args.verbose {
			continue;
		}
		for (frame_index, (image, frame)) in event.iter_frames().enumerate() {
			let sounds = if frame.has_sounds() {
				frame.sounds.join(", ")
			} else {
				"-".to_string()
			};
			println!(
				"        frame {frame_index:3} image {image:4} at ({:5}, {:5}) {:<16} sounds: {sounds}",
				frame.position_x, frame.position_y, frame.name
			);
		}
	}

	let payload: u64 = ann.image_descriptors.iter().map(|descriptor| descriptor.payload_len()).sum();
	println!("\nImages ({}, payload {payload} bytes):", ann.image_descriptors.len());
	for (index, descriptor) in ann.image_descriptors.iter().enumerate() {
		println!("  [{index:3}] {descriptor}, metadata {}", hex::encode(&descriptor.metadata));
	}

	Ok(())
}

fn summary_json(ann: &Ann) -> serde_json::Value {
	serde_json::json!({
		"header": ann.header,
		"events": ann.events,
		"images": ann
			.image_descriptors
			.iter()
			.map(|descriptor| serde_json::json!({
				"name": descriptor.name,
				"width": descriptor.width,
				"height": descriptor.height,
				"position": [descriptor.position_x, descriptor.position_y],
				"compression_type": descriptor.compression_type,
				"color_len": descriptor.color_len,
				"alpha_len": descriptor.alpha_len,
				"payload_len": descriptor.payload_len(),
				"metadata": hex::encode(&descriptor.metadata),
			}))
			.collect::<Vec<_>>(),
	})
}

fn run_roundtrip(args: RoundtripArgs) -> Result<()> {
	let policy = if args.preserve {
		DumpPolicy::preserving()
	} else {
		DumpPolicy::normalizing()
	};
	let codec = AnnCodec::new()
		.with_parse_config(args.magic.parse_config(false))
		.with_dump_policy(policy);

	let (bytes, ann) = load(&args.file, &codec)?;
	let dumped = codec.dump(&ann).context("Failed to dump container")?;
	let reparsed = codec.parse(&dumped).context("Failed to re-parse dumped container")?;

	let differences = diff_models(&ann, &reparsed);
	println!(
		"{}: {} bytes in, {} bytes out, {}",
		args.file.display(),
		bytes.len(),
		dumped.len(),
		if dumped == bytes {
			"byte-identical"
		} else {
			"bytes differ"
		}
	);
	for difference in &differences {
		println!("  - {difference}");
	}

	if let Some(output) = args.output {
		fs::write(&output, &dumped)
			.with_context(|| format!("Failed to write {}", output.display()))?;
		log::info!("Wrote {}", output.display());
	}

	if !args.preserve && !differences.is_empty() {
		log::warn!("Normalizing dump changed {} field(s)", differences.len());
	}
	Ok(())
}

fn diff_models(before: &Ann, after: &Ann) -> Vec<String> {
	let mut differences = Vec::new();
	if before.header.magic != after.header.magic {
		differences.push(format!(
			"magic 0x{:08X} -> 0x{:08X}",
			before.header.magic, after.header.magic
		));
	}
	if before.header != after.header && before.header.magic == after.header.magic {
		differences.push("header fields changed".to_string());
	}
	for (index, (a, b)) in before.events.iter().zip(&after.events).enumerate() {
		if a.loop_after_frame != b.loop_after_frame {
			differences.push(format!(
				"event {index} ({}) loop {} -> {}",
				a.name, a.loop_after_frame, b.loop_after_frame
			));
		}
		if a.frames != b.frames || a.frames_image_mapping != b.frames_image_mapping {
			differences.push(format!("event {index} ({}) frames changed", a.name));
		}
	}
	for (index, (a, b)) in before.image_descriptors.iter().zip(&after.image_descriptors).enumerate()
	{
		if a.compression_type != b.compression_type {
			differences.push(format!(
				"image {index} ({}) compression {} -> {}",
				a.name, a.compression_type, b.compression_type
			));
		}
	}
	for (index, (a, b)) in before.images.iter().zip(&after.images).enumerate() {
		if a != b {
			differences.push(format!("image {index} plane changed"));
		}
	}
	differences
}

fn run_validate(args: ValidateArgs) -> Result<()> {
	if !args.root.is_dir() {
		bail!("{} is not a directory", args.root.display());
	}

	let codec = AnnCodec::new().with_parse_config(args.magic.parse_config(true));
	let files = collect_ann_files(&args.root, args.recursive);
	if files.is_empty() {
		println!("No .ANN files found under {}", args.root.display());
		return Ok(());
	}

	let mut failures = 0usize;
	for path in &files {
		match validate_file(path, &codec, args.roundtrip) {
			Ok(ann) => println!(
				"[OK]  {} | events {:3} images {:4}",
				path.display(),
				ann.events.len(),
				ann.images.len()
			),
			Err(err) => {
				failures += 1;
				println!("[ERR] {} - {err:#}", path.display());
			}
		}
	}

	println!("\nSummary: files={} | ok={} err={}", files.len(), files.len() - failures, failures);
	if failures > 0 {
		bail!("Validation finished with errors (see summary)");
	}
	Ok(())
}

fn validate_file(path: &Path, codec: &AnnCodec, roundtrip: bool) -> Result<Ann> {
	let (_, ann) = load(path, codec)?;
	if roundtrip {
		let dumped = codec.dump(&ann).context("Dump failed")?;
		let reparsed = codec.parse(&dumped).context("Re-parse failed")?;
		let redumped = codec.dump(&reparsed).context("Second dump failed")?;
		if redumped != dumped {
			bail!("Dump is not stable across a round trip");
		}
	}
	Ok(ann)
}

fn collect_ann_files(root: &Path, recursive: bool) -> Vec<PathBuf> {
	let max_depth = if recursive {
		usize::MAX
	} else {
		1
	};
	let mut files = Vec::new();

	for entry in WalkDir::new(root).max_depth(max_depth).follow_links(false) {
		let entry = match entry {
			Ok(entry) => entry,
			Err(err) => {
				log::warn!("{err}");
				continue;
			}
		};

		let is_ann = entry
			.path()
			.extension()
			.is_some_and(|ext| ext.eq_ignore_ascii_case("ann"));
		if entry.file_type().is_file() && is_ann {
			files.push(entry.into_path());
		}
	}

	files.sort();
	files
}
