mod new_palette;
mod new_project;
