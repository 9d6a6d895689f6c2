pub mod dictation;
