fn main() {
    wizard_platformer::game::run();
}
