#[derive(Clone)]
pub enum Msg {
    SetOpen(bool),
    SelectType(common::model::contact::ContactType),
    UpdateContent(String),
    Submit,
    SubmitSucceeded,
    SubmitFailed(Option<String>),
}
