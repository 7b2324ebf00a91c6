use clap::{value_t, App, AppSettings, Arg, ArgMatches, SubCommand};

use fixpoint::{from_fixed_point, multiply, to_fixed_point, FixedPoint};

// ----------------------------------------------------------------

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let args = App::new("fixcalc")
        .version(VERSION)
        .about("Converts floats to self-scaling fixed point and back")
        .global_setting(AppSettings::AllowNegativeNumbers)
        .subcommand(
            SubCommand::with_name("convert")
                .about("Converts a float to fixed point and back")
                .arg(
                    Arg::with_name("VALUE")
                        .help("Number to convert")
                        .required(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("mul")
                .about("Multiplies two numbers in fixed point")
                .arg(
                    Arg::with_name("A")
                        .help("Left operand (its scaling is kept)")
                        .required(true),
                )
                .arg(
                    Arg::with_name("B")
                        .help("Right operand")
                        .required(true),
                ),
        )
        .get_matches();

    match args.subcommand() {
        ("convert", Some(sub)) => convert(parse_f32(sub, "VALUE")),
        ("mul", Some(sub)) => mul(parse_f32(sub, "A"), parse_f32(sub, "B")),
        _ => {
            // Nothing requested, so show the classic pair.
            convert(55.36);
            convert(2.1);
        }
    }
}

fn parse_f32(args: &ArgMatches, name: &str) -> f32 {
    value_t!(args, name, f32).unwrap_or_else(|e| e.exit())
}

fn convert(x: f32) {
    let fp = to_fixed_point(x);
    println!("Float:         {}", x);
    print_fixed(fp);
    println!("Back to float: {}", from_fixed_point(fp));
}

fn mul(a: f32, b: f32) {
    let fa = to_fixed_point(a);
    let fb = to_fixed_point(b);
    let product = multiply(fa, fb);
    print_fixed(fa);
    print_fixed(fb);
    println!("Product:       {} (scaling {})", product.value, product.scaling);
    println!("As float:      {}", from_fixed_point(product));
}

fn print_fixed(fp: FixedPoint) {
    println!("Fixed point:   {} / 2^{}", fp.value, fp.scaling);
}
