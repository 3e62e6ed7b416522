//! Demo: drive the map screen controller against mock collaborators

use routeview::{
    Coordinate, InMemoryStore, MapController, MapRenderer, MockLocationProvider, TapEvent,
    TextRenderer,
};

fn main() {
    env_logger::init();

    let provider = MockLocationProvider::new().with_fix(Coordinate::new(39.91, 116.40));
    let store = InMemoryStore::new();
    let mut controller = MapController::new(Box::new(provider), Box::new(store));
    let renderer = TextRenderer::verbose();

    println!("-- initialize --");
    println!("{}", controller.initialize());
    print!("{}", renderer.draw(&controller.scene()));

    println!("-- plan route to \"Museum\" --");
    println!("{}", controller.plan_route("Museum"));
    print!("{}", renderer.draw(&controller.scene()));

    println!("-- save current location --");
    println!("{}", controller.save_current_location());

    println!("-- history --");
    controller.toggle_history_panel();
    for entry in &controller.state().history {
        println!(
            "{} ({:.5}, {:.5}) saved {}",
            entry.name,
            entry.coordinate.latitude,
            entry.coordinate.longitude,
            entry.saved_at
        );
    }

    if let Some(entry) = controller.state().history.first().cloned() {
        println!("-- select history entry --");
        println!("{}", controller.select_history_entry(&entry));
        print!("{}", renderer.draw(&controller.scene()));
    }

    controller.handle_map_tap(TapEvent {
        latitude: 39.92,
        longitude: 116.41,
    });
}
