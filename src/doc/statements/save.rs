/*!
# `SAVE <slot>`

## Purpose
Saves the program and variables.

## Remarks
Slot 0 is read only. The whole image is written, so a later `LOAD`
brings back variables too.

## Example
```text
SAVE 1
```

*/
