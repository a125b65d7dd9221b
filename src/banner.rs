// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    let banner = r#"
                  _ _                                 _
  ___ ___   __| (_)_ __   __ _   _ __   __ _ _ __| |_ _   _
 / __/ _ \ / _` | | '_ \ / _` | | '_ \ / _` | '__| __| | | |
| (_| (_) | (_| | | | | | (_| | | |_) | (_| | |  | |_| |_| |
 \___\___/ \__,_|_|_| |_|\__, | | .__/ \__,_|_|   \__|\__, |
                         |___/  |_|                   |___/

    Mission Submissions & Live Leaderboard
"#;
    println!("{}", banner);
}
