// vmt2vmat - Source to Source 2 material translator
// Translates VMT material files (or whole directories of them) to VMAT

use std::env;
use std::path::{Path, PathBuf};
use std::process;

use vmt2vmat::batch::{self, BatchSummary};
use vmt2vmat::textures::{self, ExternalConverter};
use vmt2vmat::{TargetVariant, TextureExtension, TranslatorConfig, Translator};

struct Options {
    input: PathBuf,
    output: Option<PathBuf>,
    target: Option<TargetVariant>,
    texture_extension: Option<TextureExtension>,
    config_file: Option<PathBuf>,
    converter: Option<String>,
    verbose: bool,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        process::exit(1);
    }

    // Initialize logging before parsing so option warnings are visible
    let verbose = args.iter().any(|a| a == "-v" || a == "--verbose");
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let options = parse_args(&args);

    let mut config = match &options.config_file {
        Some(path) => match TranslatorConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Error: {}", err);
                process::exit(1);
            }
        },
        None => TranslatorConfig::default(),
    };
    if let Some(target) = options.target {
        config.target = target;
    }
    if let Some(extension) = options.texture_extension {
        config.texture_extension = extension;
    }

    log::debug!("Using configuration {:?}", config);
    let translator = Translator::new(config);

    let success = if options.input.is_dir() {
        if options.output.is_some() {
            eprintln!("Error: -o cannot be used with a directory");
            process::exit(1);
        }
        run_directory(&translator, &options)
    } else {
        run_file(&translator, &options)
    };

    if !success {
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options {
        input: PathBuf::new(),
        output: None,
        target: None,
        texture_extension: None,
        config_file: None,
        converter: None,
        verbose: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                options.output = Some(PathBuf::from(required_value(args, i)));
                i += 2;
            }
            "--target" | "--version" => {
                // Unknown targets fall back to HL:A
                options.target = Some(TargetVariant::from_arg_or_default(required_value(
                    args, i,
                )));
                i += 2;
            }
            "--texture-extension" | "--textureextension" => {
                options.texture_extension = Some(TextureExtension::from_arg_or_default(
                    required_value(args, i),
                ));
                i += 2;
            }
            "--config" => {
                options.config_file = Some(PathBuf::from(required_value(args, i)));
                i += 2;
            }
            "--convert-textures" => {
                options.converter = Some(required_value(args, i).to_string());
                i += 2;
            }
            "-v" | "--verbose" => {
                options.verbose = true;
                i += 1;
            }
            "-h" | "--help" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option '{}'", arg);
                print_usage(&args[0]);
                process::exit(1);
            }
            _ => {
                if options.input.as_os_str().is_empty() {
                    options.input = PathBuf::from(&args[i]);
                } else {
                    eprintln!("Error: Multiple inputs specified");
                    process::exit(1);
                }
                i += 1;
            }
        }
    }

    if options.input.as_os_str().is_empty() {
        eprintln!("Error: No input file or directory specified");
        print_usage(&args[0]);
        process::exit(1);
    }

    options
}

fn required_value(args: &[String], i: usize) -> &str {
    match args.get(i + 1) {
        Some(value) => value.as_str(),
        None => {
            eprintln!("Error: {} requires a value", args[i]);
            process::exit(1);
        }
    }
}

/// Directory that texture paths are relative to: the `materials` folder the
/// input lives in, or the input's own folder.
fn materials_dir(input: &Path) -> PathBuf {
    input
        .ancestors()
        .find(|dir| dir.file_name().map(|n| n == "materials").unwrap_or(false))
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default()
}

fn convert_textures(
    translator: &Translator,
    options: &Options,
    input: &Path,
    textures: &[vmt2vmat::translator::TextureReference],
) -> bool {
    let Some(program) = &options.converter else {
        return true;
    };
    let converter = ExternalConverter::new(program, &materials_dir(input));
    let failures =
        textures::convert_all(&converter, textures, translator.config().texture_extension);
    for (texture, err) in &failures {
        eprintln!("Error converting {}: {}", texture.path, err);
    }
    failures.is_empty()
}

fn run_file(translator: &Translator, options: &Options) -> bool {
    let output = batch::output_path_for(&options.input, options.output.as_deref());

    match batch::translate_file(translator, &options.input, &output) {
        Ok(report) => {
            if options.verbose {
                println!(
                    "Translated {} -> {} ({} variables)",
                    report.input.display(),
                    report.output.display(),
                    report.variable_count
                );
            }
            convert_textures(translator, options, &report.input, &report.textures)
        }
        Err(err) => {
            eprintln!("Error translating '{}': {}", options.input.display(), err);
            false
        }
    }
}

fn run_directory(translator: &Translator, options: &Options) -> bool {
    let summary: BatchSummary = match batch::translate_directory(translator, &options.input) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("Error reading '{}': {}", options.input.display(), err);
            return false;
        }
    };

    let mut textures_ok = true;
    for report in &summary.translated {
        textures_ok &= convert_textures(translator, options, &report.input, &report.textures);
    }

    for (path, err) in &summary.failed {
        eprintln!("Failed: {}: {}", path.display(), err);
    }
    println!(
        "Translated {} of {} files",
        summary.translated.len(),
        summary.total()
    );

    summary.is_success() && textures_ok
}

fn print_usage(program_name: &str) {
    println!("Usage: {} [options] <input.vmt | directory>", program_name);
    println!();
    println!("Options:");
    println!("  -o, --output <file>                 Output filename (default: input.vmat)");
    println!("  --target <hla|cs2|sbox>             Source 2 target (default: hla)");
    println!("  --texture-extension <tga|png|jpg>   Texture file extension (default: tga)");
    println!("  --config <file.toml>                Load settings from a TOML file");
    println!("  --convert-textures <program>        Run <program> <texture.vtf> <ext> per texture");
    println!("  -v, --verbose                       Verbose output");
    println!("  -h, --help                          Show this help message");
    println!();
    println!("Examples:");
    println!(
        "  {} wall01.vmt                        # Writes wall01.vmat for HL:A",
        program_name
    );
    println!(
        "  {} --target cs2 materials/           # Translates every VMT below materials/",
        program_name
    );
}
