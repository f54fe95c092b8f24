#[derive(Clone)]
pub enum Msg {
    Loaded(Vec<common::model::contact::Contact>),
    LoadFailed(String),
    Invalidated,
}
