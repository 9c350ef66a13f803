use fixkit_core::locate::locate_or_sentinel;

/// Print the first index of `target` in `items`, or -1.
pub fn run_locate(target: &str, items: &[String]) {
    println!("{}", locate_or_sentinel::<String, str>(items, target));
}
