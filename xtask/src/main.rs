fn execute(dir: &str, args: &[&str]) {
    let cmd = &args[0];
    let cmd_full = args.join(" ");
    eprintln!("Running '{}'", cmd_full);
    let status = std::process::Command::new(cmd)
        .current_dir(dir)
        .args(&args[1..])
        .spawn()
        .expect(&format!("Could not start command '{}'", cmd_full))
        .wait()
        .expect(&format!("cmd failed: '{}'", cmd_full));

    if !status.success() {
        eprintln!("Command '{}' terminated with a non-0 exit code", cmd_full);
        std::process::exit(1);
    }
    eprintln!("Finished: '{}'", cmd_full);
}

fn site_build(release: bool) {
    let mut build = vec!["cargo", "build", "--target", "wasm32-unknown-unknown"];
    if release {
        build.push("--release");
    }
    execute("site", &build);

    let profile = if release { "release" } else { "debug" };
    let wasm = format!("./target/wasm32-unknown-unknown/{}/akrck02_site.wasm", profile);
    execute(
        "./",
        &[
            "wasm-bindgen",
            "--target",
            "web",
            "--no-typescript",
            "--out-dir",
            "site/pkg",
            &wasm,
        ],
    )
}

fn site_serve() {
    execute(
        "./",
        &[
            "cargo",
            "watch",
            "-w",
            "site/src",
            "-w",
            "site/site.toml",
            "-w",
            "weft/src",
            "-s",
            "cargo xtask site-build",
        ],
    );
}

fn main() {
    let args: Vec<_> = std::env::args().skip(1).collect();
    let arg_refs: Vec<_> = args.iter().map(|x| x.as_str()).collect();

    match arg_refs.as_slice() {
        &["site-build"] => {
            site_build(false);
        }
        &["site-build", "--release"] => {
            site_build(true);
        }
        &["site-serve"] => {
            site_serve();
        }
        _ => {
            eprintln!("usage: cargo xtask <site-build [--release] | site-serve>");
            std::process::exit(1);
        }
    }
}
