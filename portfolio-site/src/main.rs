// Portfolio site entry point. Build and serve with `trunk serve`.

fn main() {
    console_error_panic_hook::set_once();
    portfolio_site::logging::init();
    leptos::mount::mount_to_body(portfolio_site::App);
}
