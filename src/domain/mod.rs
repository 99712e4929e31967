// Domain layer - Operation model, command builder and validation rules

pub mod commands;
pub mod model;
pub mod rules;
