pub mod app;
pub mod bingo_info_form;
pub mod change_state_modal;
pub mod control_panel;
pub mod lines_grid;
pub mod lines_menu;
pub mod login_screen;

pub use app::App;
pub use bingo_info_form::BingoInfoForm;
pub use change_state_modal::ChangeStateModal;
pub use control_panel::ControlPanel;
pub use lines_grid::LinesGrid;
pub use lines_menu::LinesMenu;
pub use login_screen::LoginScreen;
