/*!
# `LOAD <slot>`

## Purpose
Replaces the program and variables with a saved image.

## Remarks
Slot 0 holds the built-in program. Other slots are whatever was
last saved there. A slot number that doesn't exist is
`SUBSCRIPT OUT OF RANGE`; a slot that can't be read stops with `STOPPED`.

## Example
```text
LOAD 0
RUN
```

*/
