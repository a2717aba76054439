pub fn main() -> ! {
    codex_notify_hook::main()
}
