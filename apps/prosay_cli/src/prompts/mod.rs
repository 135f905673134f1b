pub mod text_transformer_prompt;
